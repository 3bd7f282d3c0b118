pub const BRAND: &str = "Resin Era";
pub const CONTACT_EMAIL: &str = "info@resinera.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/_resinera__";
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        name: "Eco-Friendly Animal Puzzles",
        description: "Handcrafted puzzles for a smarter, greener playtime.",
        image: "https://i.ibb.co/qYL0XyC9/Whats-App-Image-2025-08-02-at-22-11-18-1.jpg",
        alt: "Eco-Friendly Animal Puzzles",
    },
    Product {
        name: "Resin Miniature Car Collection",
        description: "Durable, artistic, and safe. A collector's dream.",
        image: "https://i.ibb.co/MxbJf5NK/Whats-App-Image-2025-08-02-at-22-11-16.jpg",
        alt: "Resin Miniature Car Collection",
    },
    Product {
        name: "Ocean Wave Keychains",
        description: "Carry a piece of the ocean with you, a reminder of what we protect.",
        image: "https://i.ibb.co/BHWY18S6/Whats-App-Image-2025-08-02-at-22-11-17.jpg",
        alt: "Ocean Wave Keychains",
    },
    Product {
        name: "Custom Resin Art Frames",
        description: "Preserve your memories in a beautiful, sustainable way.",
        image: "https://i.ibb.co/VchPFszc/Whats-App-Image-2025-07-31-at-23-01-23.jpg",
        alt: "Custom Resin Art Frames",
    },
];

/// In-page anchors shown in the header, (label, section id).
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "about"),
    ("Products", "products"),
    ("Impact", "impact"),
    ("Eco-Fact", "eco-fact"),
    ("Contact", "contact"),
];

pub struct ImpactPoint {
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const IMPACT_POINTS: [ImpactPoint; 2] = [
    ImpactPoint {
        title: "The Plastic Problem",
        body: "Plastic toys contribute to mountains of non-biodegradable waste, taking hundreds of years to break down and releasing harmful chemicals into our environment.",
        image: "/assets/plastic-waste.jpg",
        alt: "A landfill filled with plastic waste",
    },
    ImpactPoint {
        title: "Our Solution",
        body: "We use high-quality, eco-friendly resin that is durable, non-toxic, and biodegradable, ensuring that our toys leave a positive legacy, not a negative one.",
        image: "/assets/kids-nature.jpg",
        alt: "Children playing in nature",
    },
];

pub fn nav_href(id: &str) -> String {
    format!("#{}", id)
}
