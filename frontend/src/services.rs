use crate::Route;

/// One item in the services catalog. Static content, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub summary: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

impl ServiceEntry {
    /// Where the entry's detail page lives.
    pub fn route(&self) -> Route {
        Route::Service {
            slug: self.slug.to_string(),
        }
    }
}

/// A catalog entry together with its neighbours in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub previous: Option<&'static ServiceEntry>,
    pub entry: &'static ServiceEntry,
    pub next: Option<&'static ServiceEntry>,
}

pub fn locate(slug: &str) -> Option<Placement> {
    let index = SERVICES.iter().position(|entry| entry.slug == slug)?;
    Some(Placement {
        previous: index.checked_sub(1).map(|previous| &SERVICES[previous]),
        entry: &SERVICES[index],
        next: SERVICES.get(index + 1),
    })
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "web-development",
        icon: "🌐",
        title: "Web Development",
        description: "Fast, accessible web applications built to last.",
        summary: &[
            "We design and build web applications that load quickly, work on every device and stay maintainable long after launch.",
            "From marketing sites to complex dashboards, we pick the simplest stack that solves the problem and document every decision.",
        ],
        highlights: &[
            "Server-rendered and single-page apps",
            "Accessibility audits to WCAG 2.2 AA",
            "Performance budgets enforced in CI",
            "Hand-off documentation for your team",
        ],
    },
    ServiceEntry {
        slug: "mobile-apps",
        icon: "📱",
        title: "Mobile Apps",
        description: "Native and cross-platform apps for iOS and Android.",
        summary: &[
            "We ship mobile apps that feel at home on each platform while sharing as much code as makes sense.",
            "Offline support, push notifications and store releases are part of the plan from day one.",
        ],
        highlights: &[
            "Swift, Kotlin and cross-platform toolkits",
            "Offline-first data sync",
            "App Store and Play Store release management",
            "Crash reporting and analytics setup",
        ],
    },
    ServiceEntry {
        slug: "cloud-migration",
        icon: "☁️",
        title: "Cloud Migration",
        description: "Move workloads to the cloud without the downtime.",
        summary: &[
            "We plan migrations in small, reversible steps so your users never notice the move.",
            "Every workload gets a cost estimate before it moves and a cost review after.",
        ],
        highlights: &[
            "Readiness assessment and migration plan",
            "Lift-and-shift or re-platforming",
            "Zero-downtime cutovers",
            "Post-migration cost review",
        ],
    },
    ServiceEntry {
        slug: "devops",
        icon: "⚙️",
        title: "DevOps & CI/CD",
        description: "Pipelines that make releasing boring, in a good way.",
        summary: &[
            "We automate build, test and deploy so releases happen many times a day instead of once a quarter.",
            "Infrastructure is described as code, reviewed like code and rolled back like code.",
        ],
        highlights: &[
            "Build and deploy pipelines",
            "Infrastructure as code",
            "Observability and alerting",
            "On-call runbooks",
        ],
    },
    ServiceEntry {
        slug: "data-engineering",
        icon: "🗄️",
        title: "Data Engineering",
        description: "Reliable pipelines from raw events to trusted reports.",
        summary: &[
            "We build data platforms where every number on a dashboard can be traced back to its source.",
            "Batch or streaming, we size the platform to your data rather than to a vendor brochure.",
        ],
        highlights: &[
            "Warehouse and lakehouse design",
            "Batch and streaming ingestion",
            "Data quality checks",
            "Lineage and cataloguing",
        ],
    },
    ServiceEntry {
        slug: "machine-learning",
        icon: "🧠",
        title: "Machine Learning",
        description: "Models that earn their place in production.",
        summary: &[
            "We start with a baseline and a metric, and only add complexity when it moves that metric.",
            "Models ship with monitoring so you know when they drift before your customers do.",
        ],
        highlights: &[
            "Problem framing and feasibility studies",
            "Model training and evaluation",
            "Serving and monitoring",
            "LLM integration and retrieval",
        ],
    },
    ServiceEntry {
        slug: "ux-design",
        icon: "🎨",
        title: "UI/UX Design",
        description: "Interfaces people understand on the first try.",
        summary: &[
            "We research how your users actually work, then design flows that get out of their way.",
            "Designs arrive as tested prototypes and a component library your developers can use.",
        ],
        highlights: &[
            "User research and interviews",
            "Wireframes and interactive prototypes",
            "Usability testing",
            "Component libraries",
        ],
    },
    ServiceEntry {
        slug: "api-integration",
        icon: "🔌",
        title: "API Integration",
        description: "Connect the systems you already pay for.",
        summary: &[
            "We connect CRMs, payment providers, ERPs and in-house systems so data flows without copy and paste.",
            "Integrations are built with retries, idempotency and alerting so failures are visible and recoverable.",
        ],
        highlights: &[
            "REST, GraphQL and webhook integrations",
            "Public API design",
            "Idempotent, retry-safe sync jobs",
            "Vendor evaluation",
        ],
    },
    ServiceEntry {
        slug: "security-audits",
        icon: "🛡️",
        title: "Security Audits",
        description: "Find the holes before someone else does.",
        summary: &[
            "We review code, infrastructure and processes and report findings ranked by real-world risk.",
            "Every finding comes with a concrete fix, and we retest once it is applied.",
        ],
        highlights: &[
            "Application and infrastructure review",
            "Dependency and supply-chain checks",
            "Threat modelling workshops",
            "Remediation support and retesting",
        ],
    },
    ServiceEntry {
        slug: "qa-testing",
        icon: "✅",
        title: "QA & Testing",
        description: "Test suites you can trust on a Friday afternoon.",
        summary: &[
            "We build test suites that catch regressions without slowing every merge to a crawl.",
            "Flaky tests get fixed or deleted; a red build should always mean something.",
        ],
        highlights: &[
            "Unit, integration and end-to-end tests",
            "Load and performance testing",
            "Test strategy reviews",
            "Flaky test triage",
        ],
    },
    ServiceEntry {
        slug: "legacy-modernization",
        icon: "🏗️",
        title: "Legacy Modernization",
        description: "Renovate old systems without stopping the business.",
        summary: &[
            "We replace legacy systems piece by piece, keeping the old and new running side by side until the switch is safe.",
            "Knowledge locked in old code is captured in tests and documentation along the way.",
        ],
        highlights: &[
            "Codebase assessment",
            "Strangler-fig migrations",
            "Characterisation tests",
            "Data migration and reconciliation",
        ],
    },
    ServiceEntry {
        slug: "e-commerce",
        icon: "🛒",
        title: "E-commerce",
        description: "Storefronts that convert and back offices that scale.",
        summary: &[
            "We build and extend online stores, from catalog and checkout to fulfilment integrations.",
            "Checkout speed and reliability get the same attention as the storefront's looks.",
        ],
        highlights: &[
            "Headless and platform storefronts",
            "Checkout and payment flows",
            "Inventory and fulfilment integrations",
            "Conversion analytics",
        ],
    },
    ServiceEntry {
        slug: "technical-consulting",
        icon: "🧭",
        title: "Technical Consulting",
        description: "A second opinion from people who have shipped it before.",
        summary: &[
            "We help leadership teams make architecture, hiring and build-versus-buy decisions with clear trade-offs.",
            "Engagements range from a single architecture review to a fractional CTO arrangement.",
        ],
        highlights: &[
            "Architecture reviews",
            "Technical due diligence",
            "Roadmap and team planning",
            "Fractional CTO",
        ],
    },
    ServiceEntry {
        slug: "maintenance-support",
        icon: "🔧",
        title: "Maintenance & Support",
        description: "Keep your software healthy after launch.",
        summary: &[
            "We keep dependencies current, servers patched and incidents short under a predictable monthly plan.",
            "Monthly reports show what changed, what broke and what we are watching.",
        ],
        highlights: &[
            "Dependency and security updates",
            "Uptime monitoring",
            "Incident response with agreed SLAs",
            "Monthly health reports",
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use yew_router::Routable;

    use super::*;

    #[test]
    fn catalog_has_fourteen_entries() {
        assert_eq!(SERVICES.len(), 14);
    }

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for entry in SERVICES {
            assert!(seen.insert(entry.slug), "duplicate slug {}", entry.slug);
            assert!(
                entry
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not url safe",
                entry.slug
            );
        }
    }

    #[test]
    fn every_entry_has_copy() {
        for entry in SERVICES {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.summary.is_empty(), "{} has no summary", entry.slug);
            assert!(!entry.highlights.is_empty(), "{} has no highlights", entry.slug);
        }
    }

    #[test]
    fn links_match_routes() {
        for entry in SERVICES {
            let path = entry.route().to_path();
            assert_eq!(path, format!("/services/{}", entry.slug));
            assert_eq!(Route::recognize(&path), Some(entry.route()));
        }
    }

    #[test]
    fn locate_by_slug() {
        let placement = locate("devops").expect("devops is in the catalog");
        assert_eq!(placement.entry.title, "DevOps & CI/CD");
        assert_eq!(placement.previous.map(|entry| entry.slug), Some("cloud-migration"));
        assert_eq!(placement.next.map(|entry| entry.slug), Some("data-engineering"));

        assert!(locate("blockchain").is_none());
        assert!(locate("").is_none());
    }

    #[test]
    fn catalog_ends_have_one_neighbour() {
        let first = locate(SERVICES[0].slug).expect("first entry");
        assert!(first.previous.is_none());
        assert_eq!(first.next, SERVICES.get(1));

        let last = locate(SERVICES[SERVICES.len() - 1].slug).expect("last entry");
        assert!(last.next.is_none());
        assert_eq!(last.previous, SERVICES.get(SERVICES.len() - 2));
    }
}
