//! Canonical demo data used to seed a fresh store.

use crate::models::{ItineraryDay, MapsListFields, Place, PlaceType};

fn place(name: &str, kind: PlaceType, hours: &str, lat: f64, lng: f64) -> Place {
    Place {
        name: name.to_string(),
        kind,
        hours: hours.to_string(),
        lat,
        lng,
    }
}

fn list(city: &str, list_name: &str, places: Vec<Place>) -> MapsListFields {
    MapsListFields {
        city: city.to_string(),
        list_name: list_name.to_string(),
        places,
    }
}

/// Demo Paris days, planned from the "Paris Favorites" list.
pub fn paris_itinerary_days() -> Vec<ItineraryDay> {
    use PlaceType::*;

    vec![
        ItineraryDay {
            day: 1,
            places: vec![
                place("Terroirs d’Avenir", Food, "08:00 - 20:00", 48.8655, 2.3611),
                place("Musée du Parfum", Museum, "08:00 - 17:30", 48.8705, 2.3272),
                place("Galeries Lafayette", Store, "08:00 - 20:00", 48.872, 2.3325),
            ],
        },
        ItineraryDay {
            day: 2,
            places: vec![
                place("CORTADO", Food, "08:00 - 20:00", 48.8582, 2.347),
                place("La Closerie des Lilas", Food, "08:00 - 20:00", 48.8415, 2.3385),
                place("Musée d'Orsay", Museum, "09:30 - 18:00", 48.86, 2.3266),
            ],
        },
        ItineraryDay {
            day: 3,
            places: vec![
                place("Le Marais Market", Food, "09:00 - 19:00", 48.857, 2.362),
                place("Louvre Museum", Museum, "09:00 - 18:00", 48.8606, 2.3376),
                place("Printemps Haussmann", Store, "09:30 - 20:00", 48.8722, 2.3288),
            ],
        },
    ]
}

/// The canonical Google Maps lists seeded by the importer.
pub fn google_maps_lists() -> Vec<MapsListFields> {
    use PlaceType::*;

    let mut paris: Vec<Place> = paris_itinerary_days()
        .into_iter()
        .flat_map(|d| d.places)
        .collect();
    paris.extend([
        place("Eiffel Tower", Landmark, "09:30 - 23:45", 48.8584, 2.2945),
        place("Jardin du Luxembourg", Park, "07:30 - 21:30", 48.8462, 2.3372),
    ]);

    vec![
        list("Paris", "Paris Favorites", paris),
        list(
            "Milano",
            "Milano Highlights",
            vec![
                place("Duomo di Milano", Landmark, "09:00 - 19:00", 45.4642, 9.1916),
                place("Pinacoteca di Brera", Museum, "08:30 - 19:15", 45.4719, 9.1880),
                place("Galleria Vittorio Emanuele II", Store, "10:00 - 21:00", 45.4659, 9.1900),
                place("Parco Sempione", Park, "06:30 - 21:00", 45.4726, 9.1771),
                place("Luini Panzerotti", Food, "10:00 - 20:00", 45.4654, 9.1908),
            ],
        ),
        list(
            "New York",
            "NYC Must See",
            vec![
                place("Central Park", Park, "06:00 - 01:00", 40.7829, -73.9654),
                place("The Metropolitan Museum of Art", Museum, "10:00 - 17:00", 40.7794, -73.9632),
                place("Katz's Delicatessen", Food, "08:00 - 22:45", 40.7223, -73.9874),
                place("Statue of Liberty", Landmark, "09:00 - 17:00", 40.6892, -74.0445),
                place("Strand Book Store", Store, "10:00 - 20:00", 40.7332, -73.9907),
            ],
        ),
        list(
            "Frankfurt",
            "Frankfurt Essentials",
            vec![
                place("Römerberg", Landmark, "00:00 - 24:00", 50.1106, 8.6821),
                place("Städel Museum", Museum, "10:00 - 18:00", 50.1029, 8.6741),
                place("Kleinmarkthalle", Food, "08:00 - 18:00", 50.1126, 8.6834),
                place("Palmengarten", Park, "09:00 - 18:00", 50.1224, 8.6566),
            ],
        ),
        list(
            "Copenhagen",
            "Copenhagen Hygge",
            vec![
                place("Nyhavn", Landmark, "00:00 - 24:00", 55.6798, 12.5911),
                place("Tivoli Gardens", Park, "11:00 - 23:00", 55.6737, 12.5681),
                place("Torvehallerne", Food, "10:00 - 19:00", 55.6838, 12.5695),
                place("Designmuseum Danmark", Museum, "10:00 - 18:00", 55.6886, 12.5975),
                place("Illums Bolighus", Store, "10:00 - 19:00", 55.6786, 12.5779),
            ],
        ),
    ]
}
