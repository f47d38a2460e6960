//! Named screen destinations

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    MainScreen,
    EventsScreen,
    FilterActivities,
    ProfileScreen,
    VenueDetails(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteParseError {
    #[error("unknown destination \"{0}\"")]
    UnknownDestination(String),
    #[error("invalid venue id \"{0}\"")]
    InvalidVenueId(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainScreen => f.write_str("mainScreen"),
            Self::EventsScreen => f.write_str("eventsScreen"),
            Self::FilterActivities => f.write_str("filterActivities"),
            Self::ProfileScreen => f.write_str("profileScreen"),
            Self::VenueDetails(id) => write!(f, "venueDetails/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix("venueDetails/") {
            return id
                .parse()
                .map(Self::VenueDetails)
                .map_err(|_| RouteParseError::InvalidVenueId(id.to_owned()));
        }
        match s {
            "mainScreen" => Ok(Self::MainScreen),
            "eventsScreen" => Ok(Self::EventsScreen),
            "filterActivities" => Ok(Self::FilterActivities),
            "profileScreen" => Ok(Self::ProfileScreen),
            other => Err(RouteParseError::UnknownDestination(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_round_trip_through_names() {
        for route in [
            Route::MainScreen,
            Route::EventsScreen,
            Route::FilterActivities,
            Route::ProfileScreen,
            Route::VenueDetails(3),
        ] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn venue_route_carries_id() {
        assert_eq!("venueDetails/42".parse(), Ok(Route::VenueDetails(42)));
        assert_eq!(
            "venueDetails/abc".parse::<Route>(),
            Err(RouteParseError::InvalidVenueId("abc".into()))
        );
    }

    #[test]
    fn unknown_destination_is_rejected() {
        assert_eq!(
            "settingsScreen".parse::<Route>(),
            Err(RouteParseError::UnknownDestination("settingsScreen".into()))
        );
    }
}
