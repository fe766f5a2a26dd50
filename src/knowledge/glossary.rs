//! The built-in iTaukei glossary.
//!
//! Declaration order is significant: when a query contains several terms the
//! first one listed here wins.

pub(crate) const ITAUKEI_GLOSSARY: [(&str, &str); 5] = [
    (
        "bula",
        "Bula! In iTaukei culture, \"bula\" means more than hello - it represents life, health, and positive energy. When we say bula, we are wishing vitality and well-being upon others. This greeting connects us to our vanua (land) and our community values.",
    ),
    (
        "vanua",
        "Vanua is a fundamental concept in iTaukei worldview. It encompasses not just the physical land, but the people, traditions, and spiritual connections that bind a community together. The vanua includes all living and ancestral relationships to a place.",
    ),
    (
        "matanitu",
        "The matanitu refers to the traditional confederacy or kingdom structure in iTaukei society. It represents the political and social organization that connects different yavusa (tribes) under traditional leadership.",
    ),
    (
        "solesolevaki",
        "Solesolevaki is the iTaukei tradition of communal work and mutual assistance. It embodies the spirit of cooperation where community members come together to help one another, whether for farming, house-building, or community projects.",
    ),
    (
        "tabua",
        "The tabua (whale's tooth) holds deep ceremonial significance in iTaukei culture. It is presented during important occasions like marriages, apologies, and traditional ceremonies, symbolizing respect, sincerity, and the gravity of the occasion.",
    ),
];

pub(crate) const ITAUKEI_FALLBACK: &str = "I can help explain iTaukei cultural concepts, language, and traditions. Please ask about specific terms or practices you'd like to understand better. Try asking about: bula, vanua, matanitu, solesolevaki, or tabua.";
