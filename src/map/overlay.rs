use std::fmt;

use crate::selection::waypoint::Waypoint;

/// Annotation card shown over the map for the selected waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoCard {
    pub title: String,
    pub details: Vec<String>,
}

impl From<&Waypoint> for InfoCard {
    fn from(waypoint: &Waypoint) -> Self {
        let mut details = Vec::new();
        if let Some(frequency) = &waypoint.frequency {
            details.push(format!("Freq: {}", frequency));
        }
        if let Some(elevation) = waypoint.elevation {
            details.push(format!("Elev: {} ft", elevation));
        }
        Self {
            title: waypoint.name.clone(),
            details,
        }
    }
}

impl fmt::Display for InfoCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [x]", self.title)?;
        for line in &self.details {
            write!(f, "\n  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{geofile::coordinate::Coordinate, selection::waypoint::Waypoint};

    use super::InfoCard;

    #[rstest]
    fn test_card_without_optional_fields() {
        let waypoint = Waypoint::new("1", "ADW", Coordinate::new(38.81, -76.87));
        let card = InfoCard::from(&waypoint);
        assert_eq!(card.title, "ADW");
        assert!(card.details.is_empty());
        assert_eq!(card.to_string(), "ADW [x]");
    }

    #[rstest]
    fn test_card_with_frequency_and_elevation() {
        let waypoint = Waypoint {
            frequency: Some("118.300".to_string()),
            elevation: Some(280),
            ..Waypoint::new("1", "ADW", Coordinate::new(38.81, -76.87))
        };
        let card = InfoCard::from(&waypoint);
        assert_eq!(card.details, vec!["Freq: 118.300", "Elev: 280 ft"]);
        assert_eq!(card.to_string(), "ADW [x]\n  Freq: 118.300\n  Elev: 280 ft");
    }
}
