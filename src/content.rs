//! Hardcoded venues, events and activities. There is no remote source.

use crate::types::*;

pub fn sample_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: 1,
            name: "Joe Mama Karting",
            distance: "12 km away",
            description: "Feel the adrenaline rush as you race through the best go-karting track in the city!",
            people_count: "Suitable for 5+ people",
            cost_indicator: "$$",
            media: vec![
                MediaItem { kind: MediaKind::Video, source: "testvid1.mp4", caption: "Race track lap" },
                MediaItem { kind: MediaKind::Image, source: "sample_image1.jpg", caption: "Aerial view" },
            ],
            amenities: vec!["Free Parking", "On-site Cafe", "Beginner Friendly"],
            reviews: vec![
                Review { username: "Alex", comment: "Loved the fast karts and friendly staff!", rating: 5 },
                Review { username: "Mia", comment: "A bit pricey, but the track is excellent!", rating: 4 },
            ],
            address: "123 Race Track Lane, Speedyville",
            phone: "+995557557775",
        },
        Venue {
            id: 2,
            name: "Adventure Park",
            distance: "5 km away",
            description: "A perfect outdoor park with zip lines, climbing walls, and more for thrill-seekers!",
            people_count: "Ideal for groups of 4+",
            cost_indicator: "Free",
            media: vec![
                MediaItem { kind: MediaKind::Video, source: "testvid2.mp4", caption: "Zip line run" },
                MediaItem { kind: MediaKind::Image, source: "adventure_image1.jpg", caption: "Forest trail" },
            ],
            amenities: vec!["Pet-Friendly", "Picnic Areas", "Restrooms"],
            reviews: vec![
                Review { username: "Chris", comment: "Great place for the family!", rating: 5 },
                Review { username: "Sam", comment: "Some activities were closed, but still fun.", rating: 3 },
            ],
            address: "456 Adventure Road, Thrilltown",
            phone: "+995557557775",
        },
        Venue {
            id: 3,
            name: "Jazz Club",
            distance: "8 km away",
            description: "Immerse yourself in live jazz music while enjoying cocktails in a cozy setting.",
            people_count: "Best for 2-3 people",
            cost_indicator: "$$$",
            media: vec![
                MediaItem { kind: MediaKind::Video, source: "testvid3.mp4", caption: "Live band" },
                MediaItem { kind: MediaKind::Image, source: "jazzclub_image1.jpg", caption: "Interior" },
                MediaItem { kind: MediaKind::Image, source: "jazzclub_image2.jpg", caption: "Cocktails" },
            ],
            amenities: vec!["Live Music", "Cocktail Bar", "Reservations Recommended"],
            reviews: vec![
                Review { username: "Emily", comment: "Fantastic music and ambiance!", rating: 5 },
                Review { username: "Liam", comment: "Drinks were expensive but worth it.", rating: 4 },
            ],
            address: "789 Jazz Street, Melodyville",
            phone: "+995557557775",
        },
        Venue {
            id: 4,
            name: "Sunset Cafe",
            distance: "3 km away",
            description: "Relax with a morning coffee or evening tea while enjoying stunning sunset views.",
            people_count: "Cozy for 2 people",
            cost_indicator: "$",
            media: vec![
                MediaItem { kind: MediaKind::Video, source: "testvid4.mp4", caption: "Sunset over the terrace" },
                MediaItem { kind: MediaKind::Image, source: "sunset_image1.jpg", caption: "Outdoor seating" },
            ],
            amenities: vec!["Wi-Fi", "Outdoor Seating", "Vegetarian Options"],
            reviews: vec![
                Review { username: "Noah", comment: "Great coffee and view!", rating: 5 },
                Review { username: "Sophia", comment: "Service was slow, but the sunset made up for it.", rating: 3 },
            ],
            address: "321 Sunset Blvd, Viewtown",
            phone: "+995557557775",
        },
    ]
}

pub fn venue_by_id(venues: &[Venue], id: u32) -> Option<&Venue> {
    venues.iter().find(|v| v.id == id)
}

pub fn sample_events() -> Vec<Event> {
    const EVENTS: [(&str, &str, f32, &str); 10] = [
        ("Spring Music Festival", "1.2 km from city centre", 9.0, "100-200"),
        ("Tech Innovators Conference", "0.8 km from city centre", 8.7, "200-500"),
        ("International Food Fair", "2.5 km from city centre", 9.4, "50-100"),
        ("Modern Art Exhibition", "1.5 km from city centre", 9.2, "100-300"),
        ("City Marathon", "3.0 km from city centre", 8.9, "500-1000"),
        ("Outdoor Movie Night", "0.5 km from city centre", 9.1, "100-150"),
        ("Stand-up Comedy Show", "1.8 km from city centre", 9.5, "50-80"),
        ("Jazz Night", "1.0 km from city centre", 9.3, "50-200"),
        ("Science Fair", "0.7 km from city centre", 8.8, "200-400"),
        ("Cultural Heritage Festival", "2.0 km from city centre", 9.6, "300-600"),
    ];
    EVENTS
        .iter()
        .map(|&(name, distance, rating, capacity_range)| Event {
            name,
            distance,
            rating,
            capacity_range,
        })
        .collect()
}

/// Case-insensitive match on name or distance. Blank query matches everything.
pub fn search_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let query = query.trim().to_lowercase();
    events
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.name.to_lowercase().contains(&query)
                || e.distance.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn sample_activities() -> Vec<Activity> {
    const NAMES: [&str; 25] = [
        "Carting", "Clubbing", "Arcade", "Go-Kart", "Cafe",
        "Music", "Cinema", "Bowling", "Bar", "Park",
        "Gallery", "Museum", "Restaurant", "Adventure", "Beach",
        "Hiking", "Pool", "Gym", "Escape Room", "Concert",
        "Live Show", "Paintball", "Festival", "Theater", "Comedy Club",
    ];
    NAMES
        .iter()
        .map(|&name| Activity {
            name,
            selected: false,
        })
        .collect()
}
