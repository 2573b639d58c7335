//! Static portfolio content

pub const OWNER_NAME: &str = "Jordan Avery";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@jordanavery.dev";

/// Titles cycled by the hero typewriter
pub const TITLES: &[&str] = &[
    "Salesforce Developer",
    "Apex Programmer",
    "Lightning Developer",
    "CRM Specialist",
    "Salesforce Admin",
];

pub const HERO_DESCRIPTION: &str =
    "I build reliable CRM solutions on the Salesforce platform, from Apex services to Lightning interfaces.";

pub const HERO_BUTTONS: &str = "[ View Projects ]   [ Contact Me ]";

pub const SOCIAL_LINKS: &str = "github · linkedin · trailhead";

pub const ABOUT_TEXT: &str = "Certified developer with a focus on clean Apex, well-tested integrations and \
     admin-friendly configuration. I enjoy turning messy business processes into simple tools.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Apex", percent: 90 },
    Skill { name: "Lightning Web Components", percent: 85 },
    Skill { name: "SOQL / SOSL", percent: 88 },
    Skill { name: "Flows & Automation", percent: 80 },
    Skill { name: "REST Integrations", percent: 75 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
}

pub const EXPERIENCE: &[TimelineItem] = &[
    TimelineItem {
        period: "2022 - now",
        title: "Salesforce Developer",
        place: "Northwind Consulting",
    },
    TimelineItem {
        period: "2020 - 2022",
        title: "Junior Salesforce Admin",
        place: "Bluebird Retail",
    },
];

pub const EDUCATION: &[TimelineItem] = &[
    TimelineItem {
        period: "2016 - 2020",
        title: "B.Sc. Computer Science",
        place: "State University",
    },
    TimelineItem {
        period: "2021",
        title: "Platform Developer I",
        place: "Salesforce Certification",
    },
];

/// Project categories used by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Apex,
    Lightning,
    Integration,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Apex, Category::Lightning, Category::Integration];

    pub fn label(self) -> &'static str {
        match self {
            Self::Apex => "Apex",
            Self::Lightning => "Lightning",
            Self::Integration => "Integration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Case Routing Engine",
        category: Category::Apex,
        summary: "Trigger framework that assigns support cases by skill and load.",
    },
    Project {
        title: "Field Service Dashboard",
        category: Category::Lightning,
        summary: "LWC dashboard for technicians with offline-friendly caching.",
    },
    Project {
        title: "ERP Order Sync",
        category: Category::Integration,
        summary: "Bidirectional order sync with an ERP over REST and Platform Events.",
    },
    Project {
        title: "Bulk Data Cleaner",
        category: Category::Apex,
        summary: "Batch Apex job that deduplicates and normalizes account data.",
    },
    Project {
        title: "Quote Builder",
        category: Category::Lightning,
        summary: "Guided quoting component with live pricing rules.",
    },
];
