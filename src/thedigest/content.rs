//! Static copy shown across the site.
//!
//! Headings and prose that belong to a single page live in that page's template.
//! Anything listed, counted or reused sits here so the templates can loop over it.

use serde::Serialize;

pub const SITE_NAME: &str = "The Digest";
pub const TAGLINE: &str = "A weekly newsletter bringing you curated insights, trends, and actionable tips. Join thousands of readers who trust us for quality content.";
pub const COPYRIGHT: &str = "© 2024 The Digest. All rights reserved.";

pub const CONTACT_EMAIL: &str = "hello@thedigest.com";
pub const RESPONSE_TIME: &str = "Within 24 hours";
pub const LEGAL_UPDATED: &str = "January 2024";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A heading with one paragraph, used by the legal pages and sample content.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "Weekly Delivery",
        description: "Every Tuesday morning, straight to your inbox",
    },
    Feature {
        title: "Curated Content",
        description: "Hand-picked insights from industry leaders",
    },
    Feature {
        title: "Actionable Tips",
        description: "Practical advice you can implement immediately",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        content: "The insights I get from this newsletter have been game-changing for our marketing strategy. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Entrepreneur",
        content: "Concise, actionable, and always relevant. This is the only newsletter I actually look forward to reading.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Product Manager",
        content: "The weekly trends and analysis help me stay ahead of the curve. Worth every minute of reading time.",
        rating: 5,
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat {
        value: "5K+",
        label: "Subscribers",
    },
    Stat {
        value: "95%",
        label: "Open Rate",
    },
    Stat {
        value: "52",
        label: "Issues Sent",
    },
];

pub const ARCHIVE_STATS: &[Stat] = &[
    Stat {
        value: "52",
        label: "Total Issues",
    },
    Stat {
        value: "1+",
        label: "Years Active",
    },
    Stat {
        value: "5K+",
        label: "Subscribers",
    },
    Stat {
        value: "95%",
        label: "Open Rate",
    },
];

pub const ABOUT_STORY: &[&str] = &[
    "The Digest was born out of frustration. In a world overflowing with information, finding truly valuable insights felt like searching for a needle in a haystack. We were spending hours scrolling through countless articles, reports, and updates, only to find a few gems worth our time.",
    "So we decided to do something about it. We created The Digest as a solution for busy professionals who want to stay informed but don't have time to sift through the noise. Every Tuesday, we deliver a carefully curated collection of insights, trends, and actionable advice that actually matters.",
    "What started as a simple email to friends has grown into a community of over 5,000 professionals who trust us to help them stay ahead of the curve.",
];

pub const ABOUT_VALUES: &[Feature] = &[
    Feature {
        title: "Quality First",
        description: "We believe in depth over breadth. Every piece of content is carefully researched and verified.",
    },
    Feature {
        title: "Actionable Insights",
        description: "Our goal isn't just to inform, but to provide practical advice you can implement immediately.",
    },
    Feature {
        title: "Respect Your Time",
        description: "We know you're busy. Our content is concise, well-structured, and easy to digest.",
    },
];

pub const WEEKLY_FORMAT: &[&str] = &[
    "Delivered every Tuesday at 8 AM EST",
    "5-7 minute read time",
    "Mobile-friendly format",
    "Archive access for all past issues",
];

pub const CONTENT_FOCUS: &[&str] = &[
    "Industry trends and analysis",
    "Professional development tips",
    "Technology and innovation insights",
    "Leadership and management advice",
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        initials: "AJ",
        name: "Alex Johnson",
        role: "Founder & Editor",
        bio: "Former strategy consultant with 10+ years of experience in business analysis and trend identification. Passionate about making complex topics accessible.",
    },
    TeamMember {
        initials: "SM",
        name: "Sarah Mitchell",
        role: "Research Lead",
        bio: "Data scientist turned content curator with a keen eye for emerging trends. Ensures every insight is backed by solid research and real-world relevance.",
    },
];

pub const SUBSCRIBE_BENEFITS: &[Feature] = &[
    Feature {
        title: "Weekly Delivery",
        description: "Every Tuesday at 8 AM EST",
    },
    Feature {
        title: "Join 5,000+ Professionals",
        description: "Be part of our growing community",
    },
    Feature {
        title: "Privacy Protected",
        description: "We never share your email",
    },
    Feature {
        title: "Highly Rated",
        description: "95% open rate, loved by readers",
    },
];

pub const SAMPLE_CONTENT: &[Section] = &[
    Section {
        heading: "This Week's Insights",
        body: "The rise of AI in customer service: 3 key trends every business leader should know",
    },
    Section {
        heading: "Actionable Tip",
        body: "How to run effective 15-minute daily standups that actually improve productivity",
    },
    Section {
        heading: "Resource of the Week",
        body: "A curated tool that's helping teams collaborate 40% more effectively",
    },
];

pub const SUBSCRIBE_QUOTE: Testimonial = Testimonial {
    name: "Sarah K.",
    role: "Product Manager",
    content: "The best newsletter I've subscribed to. Consistently valuable content that I actually use.",
    rating: 5,
};

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How often is The Digest sent?",
        answer: "The Digest is delivered every Tuesday morning at 8 AM EST. We maintain a consistent schedule so you can plan your week around our insights.",
    },
    FaqEntry {
        question: "Can I unsubscribe at any time?",
        answer: "Absolutely! You can unsubscribe at any time by clicking the unsubscribe link at the bottom of any email, or by contacting us directly. No questions asked.",
    },
    FaqEntry {
        question: "Will my email be shared with third parties?",
        answer: "Never. We respect your privacy and will never share, sell, or rent your email address to anyone. Your information is safe with us.",
    },
    FaqEntry {
        question: "Is The Digest free?",
        answer: "Yes, The Digest is completely free. We believe in providing value to our community without barriers.",
    },
    FaqEntry {
        question: "How long does it take to read each issue?",
        answer: "Each issue is designed to be read in 5-7 minutes. We respect your time and focus on delivering concise, actionable content.",
    },
    FaqEntry {
        question: "Can I access past issues?",
        answer: "Yes! All subscribers have access to our complete archive of past issues. Simply sign in to your account to browse our collection.",
    },
];

pub const ACCOUNT_BENEFITS: &[&str] = &[
    "Access to all past newsletter issues",
    "Personalized reading preferences",
    "Download issues for offline reading",
    "Early access to special content",
];

pub const PRIVACY: &[Section] = &[
    Section {
        heading: "Information We Collect",
        body: "We collect your email address and optional first name when you subscribe to our newsletter.",
    },
    Section {
        heading: "How We Use Your Information",
        body: "We use your information solely to deliver our newsletter and improve our content.",
    },
    Section {
        heading: "Data Protection",
        body: "Your data is secure and we never share it with third parties.",
    },
];

pub const TERMS: &[Section] = &[
    Section {
        heading: "Acceptance of Terms",
        body: "By subscribing to The Digest, you agree to these terms.",
    },
    Section {
        heading: "Use of Service",
        body: "Our newsletter is provided for informational purposes only.",
    },
];
