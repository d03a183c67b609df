//! Canned response tables.
//!
//! Declaration order matters: within a table, the first entry whose key
//! matches wins. Ties are never resolved by longest match, so behavior stays
//! deterministic as entries are added.

/// Single-word greeting triggers, matched against whole tokens so that
/// "hi" does not fire inside "hiking".
pub const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "howdy", "greetings"];

/// Multi-word greeting triggers, matched as substrings.
pub const GREETING_PHRASES: &[&str] = &["good morning", "good afternoon", "good evening"];

/// Pool of greeting responses; one is picked at random per greeting.
pub const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm your trip-planning assistant. Where would you like to go?",
    "Hi there! Ready to plan an amazing trip? Tell me what you have in mind.",
    "Hey! Great to see you. Ask me about destinations, activities, or places to stay.",
    "Welcome! I can help you plan your next adventure. What are you dreaming of?",
];

/// Destination blurbs keyed by lowercase destination name.
pub const DESTINATIONS: &[(&str, &str)] = &[
    (
        "paris",
        "Paris is wonderful year-round! Top picks: the Eiffel Tower, the Louvre, \
         Montmartre, and a pastry crawl through the Marais. Spring and early fall \
         have the best weather.",
    ),
    (
        "tokyo",
        "Tokyo blends ultramodern and traditional: Shibuya crossing, Senso-ji \
         temple, Tsukiji outer market, and day trips to Hakone. Cherry blossom \
         season in late March is spectacular.",
    ),
    (
        "bali",
        "Bali is perfect for beaches and temples: Uluwatu, Ubud's rice terraces, \
         and snorkeling off Nusa Penida. The dry season from April to October is \
         the best time to visit.",
    ),
    (
        "rome",
        "Rome is an open-air museum: the Colosseum, the Vatican, Trastevere for \
         dinner. Book major sights ahead and go in spring or fall to beat the \
         crowds.",
    ),
    (
        "new york",
        "New York has endless options: Central Park, Broadway shows, world-class \
         museums, and food from every corner of the globe. Fall is a favorite \
         season for most visitors.",
    ),
    (
        "iceland",
        "Iceland is all about nature: the Golden Circle, glacier lagoons, and the \
         northern lights between September and March. Summer gives you the \
         midnight sun instead.",
    ),
];

/// Activity suggestions keyed by lowercase activity keyword.
pub const ACTIVITIES: &[(&str, &str)] = &[
    (
        "beach",
        "For a beach trip I'd suggest: swimming and snorkeling, sunset sailing, \
         beachfront dining, surfing lessons, and simply relaxing on the sand.",
    ),
    (
        "hiking",
        "Great hiking ideas: guided day hikes, national park trails, summit \
         sunrise walks, and multi-day treks with mountain hut stays.",
    ),
    (
        "museum",
        "For culture lovers: major art museums, history walking tours, gallery \
         districts, and skip-the-line passes for the big collections.",
    ),
    (
        "food",
        "Food-focused travel is the best: street food tours, cooking classes, \
         local markets, and tasting menus at regional restaurants.",
    ),
    (
        "nightlife",
        "For nightlife: rooftop bars, live music venues, night markets, and \
         local clubs. I can suggest neighborhoods once you pick a city.",
    ),
    (
        "ski",
        "For a ski trip: lift passes and lessons, apres-ski spots, and \
         snowshoeing for rest days. December through March is peak season in \
         most resorts.",
    ),
];

/// Trip-duration question triggers.
pub const DURATION_KEYWORDS: &[&str] = &["how long", "how many days", "duration", "week or"];

/// Canned answer for trip-duration questions.
pub const DURATION_RESPONSE: &str =
    "Most city trips work well in 3-5 days, while beach or nature trips shine \
     with 7-10 days. If you tell me your destination I can suggest a duration.";

/// Itinerary/planning-intent triggers.
pub const PLANNING_KEYWORDS: &[&str] = &["itinerary", "plan my", "schedule", "organize my trip"];

/// Canned answer for planning-intent questions.
pub const PLANNING_RESPONSE: &str =
    "I can build you a day-by-day itinerary! Tell me your destination, travel \
     dates, and interests, and I'll draft a plan you can adjust.";

/// Accommodation question triggers.
pub const ACCOMMODATION_KEYWORDS: &[&str] =
    &["hotel", "hostel", "resort", "accommodation", "where to stay", "airbnb"];

/// Canned answer for accommodation questions.
pub const ACCOMMODATION_RESPONSE: &str =
    "For places to stay, it depends on your style: boutique hotels for charm, \
     resorts for all-inclusive ease, hostels for budget and meeting people, or \
     apartments for longer stays. What's your budget range?";

/// Pool of default responses when nothing matches; one is picked at random.
pub const FALLBACK_RESPONSES: &[&str] = &[
    "That's a great question! Could you tell me more about what kind of trip \
     you're planning?",
    "I'd love to help with that. Which destination or activity are you curious \
     about?",
    "Let's narrow it down: are you asking about destinations, activities, or \
     places to stay?",
];
