//! Site copy and fixed content tables.
//!
//! Everything the pages print lives here as typed records, so the browser
//! app, the CLI and the tests all read the same data.

use once_cell::sync::Lazy;

use crate::catalog::{Catalog, CatalogItem, Category, Metrics};
use crate::media::MediaRef;
use crate::nav::Page;

pub const BRAND: &str = "shootsync.";
pub const COMPANY: &str = "ShootSync";

/// Large heading block at the top of a page.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    /// Light-weight heading lines.
    pub lines: &'static [&'static str],
    /// Final heading line, set in the heavier weight.
    pub emphasis: &'static str,
    pub body: &'static str,
}

/// Button linking to another page.
#[derive(Debug, Clone, Copy)]
pub struct Action {
    pub label: &'static str,
    pub target: Page,
}

/// Closing call-to-action section.
#[derive(Debug, Clone, Copy)]
pub struct CallToAction {
    pub lines: &'static [&'static str],
    pub emphasis: Option<&'static str>,
    pub body: &'static str,
    pub primary: Action,
    pub secondary: Option<Action>,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

/// Short service card shown on the home page.
#[derive(Debug, Clone, Copy)]
pub struct ServiceHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub highlighted: bool,
}

/// Full service card on the services page.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub highlighted: bool,
}

/// Subscription or rental package.
#[derive(Debug, Clone, Copy)]
pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Block of the "get in touch" column.
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Single-letter badge used as the icon.
    pub fn initial(&self) -> char {
        self.platform.chars().next().unwrap_or('?')
    }
}

/// Icon shown on a studio feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Camera,
    Video,
    Mic,
    Lightbulb,
    Wifi,
    Coffee,
    Car,
    Users,
}

#[derive(Debug, Clone, Copy)]
pub struct StudioFeature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryTile {
    pub media: &'static str,
    pub alt: &'static str,
}

// ============================================================================
// Footer
// ============================================================================

pub const COPYRIGHT: &str = "© 2024 ShootSync. All rights reserved.";

// ============================================================================
// Home
// ============================================================================

pub const HOME_HERO: Hero = Hero {
    lines: &["THE CREATIVE", "GROWTH"],
    emphasis: "AGENCY",
    body: "Where creativity meets performance. We help brands achieve unstoppable growth through \
           strategic creative solutions and data-driven marketing.",
};

pub const HOME_HERO_ACTIONS: [Action; 2] = [
    Action {
        label: "Start Your Project",
        target: Page::Contact,
    },
    Action {
        label: "View Our Work",
        target: Page::Portfolio,
    },
];

pub const HOME_ABOUT: &str = "ShootSync is a creative production and marketing agency dedicated to \
    transforming your digital vision into reality. We're a team of creative professionals who \
    specialize in delivering high-impact visual content and performance-driven marketing strategies.";

pub const HOME_STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "projects",
    },
    Stat {
        number: "98%",
        label: "satisfaction",
    },
    Stat {
        number: "5x",
        label: "growth",
    },
];

pub const HOME_SERVICES: &[ServiceHighlight] = &[
    ServiceHighlight {
        title: "COMMERCIAL SHOOTS",
        description: "Professional photography and videography that captures your brand's essence \
                      with precision and creativity.",
        highlighted: true,
    },
    ServiceHighlight {
        title: "PERFORMANCE MARKETING",
        description: "Data-driven campaigns that turn clicks into customers and budgets into \
                      unstoppable growth.",
        highlighted: false,
    },
    ServiceHighlight {
        title: "UGC CONTENT",
        description: "Authentic user-generated content that builds trust and drives engagement \
                      across all platforms.",
        highlighted: false,
    },
    ServiceHighlight {
        title: "BRAND STRATEGY",
        description: "Complete brand identity and strategic positioning that resonates with your \
                      target audience.",
        highlighted: true,
    },
];

pub const SERVICES_INTRO: &str = "Comprehensive creative and marketing solutions designed to \
    accelerate your brand's growth and maximize your digital presence.";

pub const HOME_OFFER: CallToAction = CallToAction {
    lines: &["SPECIAL OFFER", "FOR", "NEW CLIENTS"],
    emphasis: None,
    body: "We're excited to offer a special discount on comprehensive creative and marketing \
           packages for new clients. Transform your brand with our proven strategies.",
    primary: Action {
        label: "Claim Your Offer",
        target: Page::Contact,
    },
    secondary: None,
};

// ============================================================================
// About
// ============================================================================

pub const ABOUT_HERO: Hero = Hero {
    lines: &["ABOUT"],
    emphasis: "SHOOTSYNC",
    body: "We're not just another creative agency. We're your strategic growth partner, combining \
           cutting-edge creativity with performance-driven marketing to create campaigns that \
           don't just look stunning, they deliver results.",
};

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "projects completed",
    },
    Stat {
        number: "98%",
        label: "client satisfaction",
    },
    Stat {
        number: "5x",
        label: "average growth",
    },
    Stat {
        number: "50+",
        label: "team members",
    },
];

pub const ABOUT_STORY: &[&str] = &[
    "Founded in 2020, ShootSync emerged from a simple observation: most creative agencies were \
     either purely artistic or purely data-driven. We saw an opportunity to bridge this gap.",
    "Our founders, coming from backgrounds in both creative direction and performance marketing, \
     built ShootSync on the principle that creativity and conversion aren't mutually exclusive. \
     They're complementary forces that, when combined, create unstoppable growth.",
    "Today, we're proud to be the go-to creative growth partner for brands that refuse to choose \
     between beautiful and effective.",
];

pub const ABOUT_VALUES: &[Value] = &[
    Value {
        title: "CREATIVE EXCELLENCE",
        description: "We push the boundaries of creativity to deliver exceptional visual \
                      experiences that captivate and convert.",
    },
    Value {
        title: "DATA-DRIVEN RESULTS",
        description: "Every creative decision is backed by data and insights to ensure maximum \
                      performance and ROI.",
    },
    Value {
        title: "CLIENT PARTNERSHIP",
        description: "We believe in building long-term partnerships, not just completing \
                      projects. Your success is our success.",
    },
    Value {
        title: "INNOVATION FIRST",
        description: "We stay ahead of trends and technologies to keep your brand at the \
                      forefront of your industry.",
    },
];

pub const ABOUT_CTA: CallToAction = CallToAction {
    lines: &["READY TO GROW", "TOGETHER?"],
    emphasis: None,
    body: "Let's create something extraordinary that not only looks amazing but drives real \
           results for your business.",
    primary: Action {
        label: "Start Your Project",
        target: Page::Contact,
    },
    secondary: Some(Action {
        label: "View Our Work",
        target: Page::Portfolio,
    }),
};

// ============================================================================
// Services
// ============================================================================

pub const SERVICES_HERO: Hero = Hero {
    lines: &["OUR"],
    emphasis: "SERVICES",
    body: SERVICES_INTRO,
};

pub const SERVICE_OFFERINGS: &[ServiceOffering] = &[
    ServiceOffering {
        title: "COMMERCIAL SHOOTS",
        description: "Professional photography and videography that captures your brand's \
                      essence with precision.",
        features: &[
            "4K Video Production",
            "Professional Photography",
            "Brand Storytelling",
            "Creative Direction",
        ],
        price: "From $2,500",
        highlighted: false,
    },
    ServiceOffering {
        title: "PERFORMANCE MARKETING",
        description: "Data-driven campaigns that turn clicks into customers and budgets into \
                      unstoppable growth.",
        features: &[
            "Paid Advertising",
            "Conversion Optimization",
            "Analytics & Reporting",
            "A/B Testing",
        ],
        price: "From $3,000",
        highlighted: true,
    },
    ServiceOffering {
        title: "UGC CONTENT",
        description: "Authentic user-generated content that builds trust and drives engagement \
                      across platforms.",
        features: &[
            "Content Creation",
            "Social Media Optimization",
            "Influencer Collaboration",
            "Performance Tracking",
        ],
        price: "From $1,200",
        highlighted: false,
    },
    ServiceOffering {
        title: "BRAND STRATEGY",
        description: "Complete brand identity and strategic positioning that resonates with your \
                      audience.",
        features: &["Logo Design", "Brand Guidelines", "Visual Identity", "Brand Strategy"],
        price: "From $5,000",
        highlighted: false,
    },
    ServiceOffering {
        title: "DIGITAL MARKETING",
        description: "Comprehensive digital strategy and execution across all channels and \
                      platforms.",
        features: &[
            "SEO Optimization",
            "Social Media Management",
            "Email Marketing",
            "Content Strategy",
        ],
        price: "From $2,000",
        highlighted: false,
    },
    ServiceOffering {
        title: "WEB DEVELOPMENT",
        description: "Modern, responsive web experiences that convert visitors into customers.",
        features: &[
            "Custom Development",
            "Responsive Design",
            "E-commerce Solutions",
            "CMS Integration",
        ],
        price: "From $4,000",
        highlighted: false,
    },
];

pub const SERVICE_PACKAGES: &[Package] = &[
    Package {
        name: "STARTER",
        price: "$2,500",
        period: "/month",
        description: "Perfect for small businesses getting started",
        features: &[
            "2 Commercial Shoots",
            "Basic Content Creation",
            "Social Media Management",
            "Monthly Analytics Report",
            "Email Support",
        ],
        popular: false,
        cta: "Get Started",
    },
    Package {
        name: "GROWTH",
        price: "$5,000",
        period: "/month",
        description: "Ideal for growing businesses",
        features: &[
            "4 Commercial Shoots",
            "Advanced Content Creation",
            "Performance Marketing",
            "Weekly Analytics Reports",
            "Priority Support",
            "Brand Strategy Session",
        ],
        popular: true,
        cta: "Get Started",
    },
    Package {
        name: "ENTERPRISE",
        price: "$10,000",
        period: "/month",
        description: "For established brands seeking maximum growth",
        features: &[
            "Unlimited Shoots",
            "Full Creative Suite",
            "Advanced Performance Marketing",
            "Daily Analytics & Optimization",
            "Dedicated Account Manager",
            "Custom Brand Development",
        ],
        popular: false,
        cta: "Get Started",
    },
];

pub const SERVICES_CTA: CallToAction = CallToAction {
    lines: &["READY TO GET", "STARTED?"],
    emphasis: None,
    body: "Let's discuss your project and create a custom solution that fits your needs and \
           budget perfectly.",
    primary: Action {
        label: "Get Custom Quote",
        target: Page::Contact,
    },
    secondary: Some(Action {
        label: "View Our Work",
        target: Page::Portfolio,
    }),
};

// ============================================================================
// Portfolio
// ============================================================================

pub const PORTFOLIO_HERO: Hero = Hero {
    lines: &["OUR"],
    emphasis: "WORK",
    body: "Explore our latest projects and see how we've helped brands achieve extraordinary \
           results through strategic creative solutions and performance-driven marketing.",
};

pub const PORTFOLIO_IMPACT: &[Stat] = &[
    Stat {
        number: "500+",
        label: "projects completed",
    },
    Stat {
        number: "2.5B+",
        label: "total impressions",
    },
    Stat {
        number: "340%",
        label: "average ROAS",
    },
    Stat {
        number: "98%",
        label: "client satisfaction",
    },
];

pub const PORTFOLIO_CTA: CallToAction = CallToAction {
    lines: &["READY TO CREATE", "YOUR SUCCESS"],
    emphasis: Some("STORY?"),
    body: "Let's discuss your project and create something extraordinary that drives real \
           results for your business.",
    primary: Action {
        label: "Start Your Project",
        target: Page::Contact,
    },
    secondary: Some(Action {
        label: "View Our Services",
        target: Page::Services,
    }),
};

fn item(
    title: &str,
    category: Category,
    description: &str,
    media: &str,
    metrics: [(&str, &str); 3],
    year: &str,
) -> CatalogItem {
    CatalogItem {
        title: title.to_string(),
        category,
        description: description.to_string(),
        media: MediaRef::new(media),
        metrics: metrics.into_iter().collect::<Metrics>(),
        year: year.to_string(),
    }
}

static PORTFOLIO: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        item(
            "Nike Air Max Campaign",
            Category::Commercial,
            "High-energy commercial shoot showcasing the latest Nike Air Max collection with \
             dynamic visuals and compelling storytelling.",
            "/placeholder.svg?height=400&width=600&text=Nike+Campaign",
            [("views", "2.5M"), ("engagement", "8.2%"), ("conversion", "12%")],
            "2024",
        ),
        item(
            "TechStart Launch Video",
            Category::Ugc,
            "Authentic user-generated content strategy for a tech startup's product launch, \
             featuring real customer testimonials.",
            "/placeholder.svg?height=400&width=600&text=TechStart+Launch",
            [("views", "1.8M"), ("engagement", "15.3%"), ("conversion", "18%")],
            "2024",
        ),
        item(
            "Luxury Fashion Brand",
            Category::Branding,
            "Complete brand identity redesign for a luxury fashion house, including logo, visual \
             system, and brand guidelines.",
            "/placeholder.svg?height=400&width=600&text=Fashion+Brand",
            [("reach", "5.2M"), ("engagement", "11.7%"), ("sales", "+45%")],
            "2023",
        ),
        item(
            "E-commerce Performance",
            Category::Performance,
            "Data-driven advertising campaign that increased ROAS by 340% through strategic \
             targeting and optimization.",
            "/images/Ecommerce.JPG",
            [("roas", "340%"), ("ctr", "4.8%"), ("conversion", "22%")],
            "2024",
        ),
        item(
            "Restaurant Social Campaign",
            Category::Digital,
            "Comprehensive social media strategy that drove significant foot traffic and online \
             engagement.",
            "/placeholder.svg?height=400&width=600&text=Restaurant+Social",
            [("followers", "+125%"), ("engagement", "19.4%"), ("visits", "+67%")],
            "2023",
        ),
        item(
            "Fitness App Commercial",
            Category::Commercial,
            "Motivational commercial series showcasing real fitness transformation stories and \
             app features.",
            "/images/Fitness.PNG",
            [("views", "3.1M"), ("downloads", "+89%"), ("retention", "78%")],
            "2024",
        ),
        item(
            "Beauty Brand UGC",
            Category::Ugc,
            "Authentic beauty tutorials and reviews from real customers, building trust and \
             driving conversions.",
            "/placeholder.svg?height=400&width=600&text=Beauty+UGC",
            [("views", "4.2M"), ("engagement", "23.1%"), ("sales", "+156%")],
            "2023",
        ),
        item(
            "SaaS Performance Campaign",
            Category::Performance,
            "B2B lead generation campaign for enterprise software, focusing on quality leads and \
             conversion optimization.",
            "/placeholder.svg?height=400&width=600&text=SaaS+Campaign",
            [("leads", "2,847"), ("cost", "-42%"), ("quality", "94%")],
            "2024",
        ),
        item(
            "Sustainable Brand Identity",
            Category::Branding,
            "Eco-friendly brand identity for sustainable products company, emphasizing \
             environmental values.",
            "/images/Honda.PNG",
            [("awareness", "+78%"), ("sentiment", "92%"), ("sales", "+34%")],
            "2023",
        ),
    ])
});

/// The portfolio catalog, in display order.
pub fn portfolio_catalog() -> Catalog {
    PORTFOLIO.clone()
}

// ============================================================================
// Contact
// ============================================================================

pub const CONTACT_HERO: Hero = Hero {
    lines: &["LET'S CREATE"],
    emphasis: "TOGETHER",
    body: "Ready to transform your brand? Get in touch and let's discuss your next big project.",
};

pub const CONTACT_INTRO: &str =
    "We'd love to hear about your project. Send us a message and we'll respond within 24 hours.";

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        lines: &["hello@shootsync.com", "support@shootsync.com"],
    },
    ContactChannel {
        title: "Phone",
        lines: &["+1 (555) 123-4567", "+1 (555) 987-6543"],
    },
    ContactChannel {
        title: "Office",
        lines: &["123 Creative Street", "New York, NY 10001"],
    },
    ContactChannel {
        title: "Business Hours",
        lines: &["Monday - Friday: 9:00 AM - 6:00 PM", "Saturday: 10:00 AM - 4:00 PM"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "Instagram",
        href: "https://instagram.com/shootsync",
    },
    SocialLink {
        platform: "Twitter",
        href: "https://twitter.com/shootsync",
    },
    SocialLink {
        platform: "LinkedIn",
        href: "https://linkedin.com/company/shootsync",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What's your typical project timeline?",
        answer: "Project timelines vary based on scope, but most projects take 2-8 weeks from \
                 concept to completion. We'll provide a detailed timeline during our initial \
                 consultation.",
    },
    Faq {
        question: "Do you work with businesses of all sizes?",
        answer: "Yes! We work with startups, small businesses, and enterprise companies. Our \
                 services are scalable to meet your specific needs and budget.",
    },
    Faq {
        question: "What's included in your pricing?",
        answer: "Our pricing includes strategy, creative development, production, and \
                 post-production. We provide transparent pricing with no hidden fees.",
    },
    Faq {
        question: "Can you help with ongoing marketing needs?",
        answer: "We offer retainer packages for ongoing creative and marketing support to help \
                 your brand grow consistently.",
    },
];

// ============================================================================
// Studio
// ============================================================================

pub const STUDIO_HERO: Hero = Hero {
    lines: &["RENT OUR"],
    emphasis: "STUDIO",
    body: "Professional studio space equipped with everything you need for your next creative \
           project.",
};

pub const STUDIO_FEATURES: &[StudioFeature] = &[
    StudioFeature {
        icon: FeatureIcon::Camera,
        title: "Professional Equipment",
        description: "Latest cameras, lenses, and photography gear",
    },
    StudioFeature {
        icon: FeatureIcon::Video,
        title: "4K Video Setup",
        description: "Professional video recording and streaming equipment",
    },
    StudioFeature {
        icon: FeatureIcon::Mic,
        title: "Audio Recording",
        description: "High-quality microphones and sound equipment",
    },
    StudioFeature {
        icon: FeatureIcon::Lightbulb,
        title: "Professional Lighting",
        description: "Studio lighting setups for any mood",
    },
    StudioFeature {
        icon: FeatureIcon::Wifi,
        title: "High-Speed Internet",
        description: "Gigabit internet for live streaming and uploads",
    },
    StudioFeature {
        icon: FeatureIcon::Coffee,
        title: "Refreshments",
        description: "Complimentary coffee, tea, and snacks",
    },
    StudioFeature {
        icon: FeatureIcon::Car,
        title: "Free Parking",
        description: "Convenient parking for you and your team",
    },
    StudioFeature {
        icon: FeatureIcon::Users,
        title: "Team Support",
        description: "Optional technical support and assistance",
    },
];

pub const STUDIO_PACKAGES: &[Package] = &[
    Package {
        name: "Hourly",
        price: "$150",
        period: "/hour",
        description: "Perfect for quick shoots and content creation",
        features: &[
            "Studio access for 1 hour",
            "Basic lighting setup",
            "Equipment usage",
            "Free parking",
            "Refreshments included",
        ],
        popular: false,
        cta: "Book Now",
    },
    Package {
        name: "Half Day",
        price: "$500",
        period: "/4 hours",
        description: "Ideal for medium-sized productions",
        features: &[
            "Studio access for 4 hours",
            "Professional lighting setup",
            "All equipment included",
            "Technical support",
            "Free parking",
            "Catering options",
        ],
        popular: true,
        cta: "Book Now",
    },
    Package {
        name: "Full Day",
        price: "$800",
        period: "/8 hours",
        description: "Best value for extensive productions",
        features: &[
            "Studio access for 8 hours",
            "Custom lighting setup",
            "Premium equipment access",
            "Dedicated technical support",
            "Free parking",
            "Full catering service",
            "Editing suite access",
        ],
        popular: false,
        cta: "Book Now",
    },
];

pub const STUDIO_GALLERY: &[GalleryTile] = &[
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+1",
        alt: "Studio view 1",
    },
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+2",
        alt: "Studio view 2",
    },
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+3",
        alt: "Studio view 3",
    },
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+4",
        alt: "Studio view 4",
    },
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+5",
        alt: "Studio view 5",
    },
    GalleryTile {
        media: "/placeholder.svg?height=300&width=400&text=Studio+6",
        alt: "Studio view 6",
    },
];

pub const STUDIO_CTA: CallToAction = CallToAction {
    lines: &["READY TO"],
    emphasis: Some("BOOK?"),
    body: "Contact us to check availability and book your studio session today.",
    primary: Action {
        label: "Book Studio Now",
        target: Page::Contact,
    },
    secondary: None,
};

// ============================================================================
// Per-page lookups
// ============================================================================

pub fn hero(page: Page) -> &'static Hero {
    match page {
        Page::Home => &HOME_HERO,
        Page::About => &ABOUT_HERO,
        Page::Services => &SERVICES_HERO,
        Page::Portfolio => &PORTFOLIO_HERO,
        Page::Contact => &CONTACT_HERO,
        Page::Studio => &STUDIO_HERO,
    }
}

/// Closing section of each page. Contact ends on the FAQ instead.
pub fn call_to_action(page: Page) -> Option<&'static CallToAction> {
    match page {
        Page::Home => Some(&HOME_OFFER),
        Page::About => Some(&ABOUT_CTA),
        Page::Services => Some(&SERVICES_CTA),
        Page::Portfolio => Some(&PORTFOLIO_CTA),
        Page::Contact => None,
        Page::Studio => Some(&STUDIO_CTA),
    }
}

/// Section ids of a page, top to bottom (navigation and footer excluded).
pub fn outline(page: Page) -> &'static [&'static str] {
    match page {
        Page::Home => &["hero", "about", "services", "offer"],
        Page::About => &["hero", "stats", "story", "values", "cta"],
        Page::Services => &["hero", "offerings", "packages", "cta"],
        Page::Portfolio => &["hero", "filter", "grid", "impact", "cta"],
        Page::Contact => &["hero", "form", "details", "faq"],
        Page::Studio => &["hero", "features", "packages", "gallery", "cta"],
    }
}

/// Every media reference used by the site, with a description of where.
pub fn media_references() -> Vec<(String, MediaRef)> {
    let catalog = portfolio_catalog();
    let mut refs: Vec<(String, MediaRef)> = catalog
        .items()
        .iter()
        .map(|item| (format!("portfolio: {}", item.title), item.media.clone()))
        .collect();
    refs.extend(
        STUDIO_GALLERY
            .iter()
            .map(|tile| (format!("studio: {}", tile.alt), MediaRef::new(tile.media))),
    );
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_has_nine_items_in_five_categories() {
        let catalog = portfolio_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.items().iter().all(|item| item.metrics.len() == 3));
    }

    #[test]
    fn every_page_has_hero_and_sections() {
        for page in Page::ALL {
            assert!(!hero(page).emphasis.is_empty());
            assert_eq!(outline(page).first(), Some(&"hero"));
        }
        assert!(call_to_action(Page::Contact).is_none());
    }

    #[test]
    fn exactly_one_popular_package_per_table() {
        assert_eq!(SERVICE_PACKAGES.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(STUDIO_PACKAGES.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(SERVICE_OFFERINGS.iter().filter(|s| s.highlighted).count(), 1);
    }

    #[test]
    fn media_references_cover_catalog_and_gallery() {
        let refs = media_references();
        assert_eq!(refs.len(), 9 + STUDIO_GALLERY.len());
        assert_eq!(refs.iter().filter(|(_, m)| !m.is_placeholder()).count(), 3);
    }

    #[test]
    fn social_initials() {
        let initials: String = SOCIAL_LINKS.iter().map(SocialLink::initial).collect();
        assert_eq!(initials, "ITL");
    }
}
