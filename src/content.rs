//! Copy and colour tokens rendered by the landing page sections.

pub const BRAND: &str = "Profilio";

pub static NAV_ITEMS: [&str; 4] = ["Features", "Templates", "Pricing", "Contact"];

pub fn nav_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// CSS gradient used for the step badge and accents.
    pub gradient: &'static str,
}

pub static STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Choose a Template",
        description: "Select from our curated collection of professional portfolio templates",
        gradient: "linear-gradient(90deg, #60a5fa, #22d3ee)",
    },
    Step {
        number: 2,
        title: "Customize Your Content",
        description: "Add your projects, skills, and personal information with our intuitive editor",
        gradient: "linear-gradient(90deg, #c084fc, #f472b6)",
    },
    Step {
        number: 3,
        title: "Publish & Share",
        description: "Deploy your portfolio instantly and share it with the world",
        gradient: "linear-gradient(90deg, #fb923c, #f87171)",
    },
];

pub struct Tool {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub static TOOLS: [Tool; 12] = [
    Tool { name: "Git", color: "#f97316", icon: "G" },
    Tool { name: "VS Code", color: "#3b82f6", icon: "VS" },
    Tool { name: "Figma", color: "#a855f7", icon: "F" },
    Tool { name: "GitHub", color: "#1f2937", icon: "GH" },
    Tool { name: "Slack", color: "#22c55e", icon: "S" },
    Tool { name: "Notion", color: "#000000", icon: "N" },
    Tool { name: "Discord", color: "#6366f1", icon: "D" },
    Tool { name: "Chrome", color: "#ef4444", icon: "C" },
    Tool { name: "Safari", color: "#60a5fa", icon: "S" },
    Tool { name: "Firefox", color: "#ea580c", icon: "F" },
    Tool { name: "Edge", color: "#2563eb", icon: "E" },
    Tool { name: "Opera", color: "#dc2626", icon: "O" },
];

#[derive(Clone, Copy, PartialEq)]
pub enum IntegrationKind {
    Checklist(&'static [&'static str]),
    Meter { label: &'static str, value: &'static str, percent: u8 },
    Action(&'static str),
}

pub struct Integration {
    pub badge: &'static str,
    pub gradient: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: IntegrationKind,
}

pub static INTEGRATIONS: [Integration; 3] = [
    Integration {
        badge: "API",
        gradient: "linear-gradient(90deg, #4ade80, #3b82f6)",
        title: "API Integration",
        description: "Connect directly with your GitHub, GitLab, or Bitbucket repositories to automatically sync your projects.",
        kind: IntegrationKind::Checklist(&["Real-time synchronization", "Automatic updates", "Secure connections"]),
    },
    Integration {
        badge: "📊",
        gradient: "linear-gradient(90deg, #c084fc, #ec4899)",
        title: "Smart Analytics",
        description: "Track visitor engagement, project views, and portfolio performance with detailed analytics.",
        kind: IntegrationKind::Meter { label: "Monthly Views", value: "2,847", percent: 75 },
    },
    Integration {
        badge: "🚀",
        gradient: "linear-gradient(90deg, #fb923c, #ef4444)",
        title: "One-Click Deploy",
        description: "Deploy your portfolio to Vercel, Netlify, or GitHub Pages with a single click.",
        kind: IntegrationKind::Action("Deploy Now"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mockup {
    Dashboard,
    Analytics,
    Showcase,
    Sync,
    Collaboration,
    Templates,
}

pub struct Feature {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub card_background: &'static str,
    pub decoration: &'static str,
    pub mockup: Mockup,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        title: "One Profile, Infinite Possibilities",
        subtitle: "Unified Dashboard",
        description: "Centralize all your projects, skills, and achievements in one beautiful, organized space.",
        card_background: "linear-gradient(135deg, #faf5ff, #fdf2f8)",
        decoration: "linear-gradient(135deg, #f3e8ff, #fce7f3)",
        mockup: Mockup::Dashboard,
    },
    Feature {
        title: "Smart Analytics",
        subtitle: "Track & Optimize",
        description: "Get detailed insights into your portfolio performance and visitor engagement.",
        card_background: "linear-gradient(135deg, #eff6ff, #ecfeff)",
        decoration: "linear-gradient(135deg, #dbeafe, #cffafe)",
        mockup: Mockup::Analytics,
    },
    Feature {
        title: "Custom Showcase",
        subtitle: "Stand Out",
        description: "Create unique project presentations that showcase your work in the best light.",
        card_background: "linear-gradient(135deg, #f0fdf4, #ecfdf5)",
        decoration: "linear-gradient(135deg, #dcfce7, #d1fae5)",
        mockup: Mockup::Showcase,
    },
    Feature {
        title: "Real-time Sync",
        subtitle: "Always Updated",
        description: "Automatically sync with your repositories and keep your portfolio current.",
        card_background: "linear-gradient(135deg, #fff7ed, #fef2f2)",
        decoration: "linear-gradient(135deg, #ffedd5, #fee2e2)",
        mockup: Mockup::Sync,
    },
    Feature {
        title: "Collaboration Tools",
        subtitle: "Work Together",
        description: "Share projects, get feedback, and collaborate with other developers.",
        card_background: "linear-gradient(135deg, #eef2ff, #faf5ff)",
        decoration: "linear-gradient(135deg, #e0e7ff, #f3e8ff)",
        mockup: Mockup::Collaboration,
    },
    Feature {
        title: "Dynamic Templates",
        subtitle: "Endless Customization",
        description: "Choose from professionally designed templates or create your own unique style.",
        card_background: "linear-gradient(135deg, #fdf2f8, #fff1f2)",
        decoration: "linear-gradient(135deg, #fce7f3, #ffe4e6)",
        mockup: Mockup::Templates,
    },
];

pub const MAX_RATING: u8 = 5;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub initials: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Elena Davis",
        role: "Full Stack Developer",
        company: "TechCorp",
        initials: "ED",
        rating: 5,
        quote: "Profilio transformed how I showcase my work. The seamless GitHub integration and beautiful templates made creating my portfolio effortless.",
        background: "linear-gradient(135deg, #dbeafe, #cffafe)",
        accent: "#3b82f6",
    },
    Testimonial {
        name: "Carlos Mitchell",
        role: "Frontend Engineer",
        company: "StartupX",
        initials: "CM",
        rating: 5,
        quote: "The analytics feature helped me understand which projects resonate most with employers. Got 3 job offers in 2 weeks!",
        background: "linear-gradient(135deg, #f3e8ff, #fce7f3)",
        accent: "#a855f7",
    },
    Testimonial {
        name: "Aisha Patel",
        role: "UI/UX Designer",
        company: "Design Studio",
        initials: "AP",
        rating: 5,
        quote: "Finally, a platform that understands designers and developers. The customization options are incredible and the results speak for themselves.",
        background: "linear-gradient(135deg, #dcfce7, #d1fae5)",
        accent: "#22c55e",
    },
];

pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { figure: "50K+", label: "Developers" },
    Stat { figure: "200K+", label: "Portfolios Created" },
    Stat { figure: "1M+", label: "Project Views" },
    Stat { figure: "98%", label: "Satisfaction Rate" },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CTA_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: "⚡", title: "Lightning Fast", description: "Set up in under 5 minutes" },
    Highlight { icon: "🔒", title: "Secure & Private", description: "Your data is always protected" },
    Highlight { icon: "💎", title: "Premium Quality", description: "Professional designs that impress" },
];

pub struct FooterColumn {
    pub category: &'static str,
    pub links: [&'static str; 4],
}

pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn { category: "Product", links: ["Features", "Templates", "Pricing", "Integrations"] },
    FooterColumn { category: "Company", links: ["About", "Blog", "Careers", "Press"] },
    FooterColumn { category: "Resources", links: ["Documentation", "Help Center", "Community", "Status"] },
    FooterColumn { category: "Legal", links: ["Privacy", "Terms", "Cookies", "Licenses"] },
];

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Twitter", icon: "T", href: "#" },
    SocialLink { name: "GitHub", icon: "G", href: "#" },
    SocialLink { name: "LinkedIn", icon: "L", href: "#" },
    SocialLink { name: "Discord", icon: "D", href: "#" },
];

pub static LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(!key.is_empty(), "empty key");
            assert!(seen.insert(key), "duplicate key {}", key);
        }
    }

    #[test]
    fn steps_are_numbered_from_one() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
            assert!(!step.title.is_empty());
            assert!(!step.description.is_empty());
        }
    }

    #[test]
    fn ratings_fit_the_star_row() {
        for t in &TESTIMONIALS {
            assert!(t.rating <= MAX_RATING, "{} rated {}", t.name, t.rating);
        }
    }

    #[test]
    fn render_keys_are_unique() {
        assert_unique(NAV_ITEMS);
        assert_unique(TOOLS.iter().map(|t| t.name));
        assert_unique(FEATURES.iter().map(|f| f.title));
        assert_unique(TESTIMONIALS.iter().map(|t| t.name));
        assert_unique(STATS.iter().map(|s| s.label));
        assert_unique(CTA_HIGHLIGHTS.iter().map(|h| h.title));
        assert_unique(FOOTER_COLUMNS.iter().map(|c| c.category));
        assert_unique(SOCIAL_LINKS.iter().map(|s| s.name));
        for column in &FOOTER_COLUMNS {
            assert_unique(column.links);
        }
    }

    #[test]
    fn every_mockup_is_shown_once() {
        let mockups: HashSet<Mockup> = FEATURES.iter().map(|f| f.mockup).collect();
        assert_eq!(mockups.len(), FEATURES.len());
    }

    #[test]
    fn meter_is_a_percentage() {
        for integration in &INTEGRATIONS {
            if let IntegrationKind::Meter { percent, .. } = integration.kind {
                assert!(percent <= 100);
            }
        }
    }

    #[test]
    fn anchors_are_lowercase_fragments() {
        assert_eq!(nav_anchor("Features"), "#features");
        assert_eq!(nav_anchor("Contact"), "#contact");
    }
}
