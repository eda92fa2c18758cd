use rand::seq::IndexedRandom;

const STREET_TEMPLATES: [&str; 5] = [
    "The way you captured the light in this urban scene is incredible! The shadows add such depth 📸",
    "This candid moment tells such a powerful story. Street photography at its finest! 🔥",
    "Your eye for composition in chaotic urban environments is amazing. Love this capture! ✨",
    "The contrast between the subjects and the background is perfect. Great street work! 📷",
    "This has such strong documentary vibes. Really captures the essence of the city 🏙️",
];

const EDITORIAL_TEMPLATES: [&str; 5] = [
    "This composition is absolutely stunning! The styling and mood work perfectly together ✨",
    "The editorial vision here is so strong. Every element contributes to the story 📸",
    "Your use of color and texture creates such a compelling narrative. Beautiful work! 🎨",
    "The lighting setup here is perfection. Really elevates the entire concept 💡",
    "This has such high fashion energy. The model and styling are on point! 👑",
];

const COMMERCIAL_TEMPLATES: [&str; 5] = [
    "Such clean execution! The attention to detail really shows your professionalism 🔥",
    "This product shot is incredibly polished. The lighting is spot-on! 📸",
    "Your commercial work always has such strong brand consistency. Well done! ✨",
    "The composition draws the eye exactly where it needs to go. Great commercial instinct! 💼",
    "This level of technical precision is why you're killing it in commercial work! 📷",
];

pub const ENGAGEMENT_TIPS: [&str; 7] = [
    "Engage within the first hour of posting for maximum visibility",
    "Ask genuine questions about their technique or creative process",
    "Share your own related experience when commenting",
    "Use 2-3 relevant emojis to add personality to your comments",
    "Engage with their stories and reels, not just feed posts",
    "Follow up on previous conversations in new comments",
    "Tag mutual photographer friends when relevant",
];

pub const BEST_TIMES: [(&str, &str); 7] = [
    ("Monday", "8-10 AM, 7-9 PM"),
    ("Tuesday", "9-11 AM, 6-8 PM"),
    ("Wednesday", "8-10 AM, 7-9 PM"),
    ("Thursday", "9-11 AM, 6-8 PM"),
    ("Friday", "7-9 AM, 5-7 PM"),
    ("Saturday", "10 AM-12 PM, 2-4 PM"),
    ("Sunday", "9-11 AM, 1-3 PM"),
];

fn bank(niche: &str) -> Option<&'static [&'static str]> {
    match niche {
        "street" => Some(&STREET_TEMPLATES),
        "editorial" => Some(&EDITORIAL_TEMPLATES),
        "commercial" => Some(&COMMERCIAL_TEMPLATES),
        _ => None,
    }
}

/// Picks a random built-in comment for a known niche.
pub fn generate(niche: &str) -> Option<&'static str> {
    bank(niche)?.choose(&mut rand::rng()).copied()
}
