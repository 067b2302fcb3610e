// SPDX-License-Identifier: MPL-2.0
//! Static page content: breeds, facts and feature bullet points.
//!
//! This is configuration, not derived state. The session only stores an
//! index into [`FACTS`]; everything else is read straight by the view.

use std::num::NonZeroUsize;

/// One entry of the "Popular Breeds" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub name: &'static str,
    pub origin: &'static str,
    /// Comma separated traits, rendered as badges.
    pub temperament: &'static str,
}

impl Breed {
    /// Splits the temperament into individual traits.
    pub fn traits(&self) -> impl Iterator<Item = &'static str> {
        self.temperament
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

pub const BREEDS: &[Breed] = &[
    Breed {
        name: "Siamese",
        origin: "Thailand",
        temperament: "Vocal, Affectionate, Intelligent",
    },
    Breed {
        name: "Persian",
        origin: "Iran",
        temperament: "Gentle, Quiet, Docile",
    },
    Breed {
        name: "Maine Coon",
        origin: "United States",
        temperament: "Gentle, Intelligent, Independent",
    },
    Breed {
        name: "Bengal",
        origin: "United States",
        temperament: "Energetic, Playful, Curious",
    },
    Breed {
        name: "Scottish Fold",
        origin: "Scotland",
        temperament: "Sweet, Quiet, Adaptable",
    },
];

pub const FACTS: &[&str] = &[
    "A group of cats is called a \"clowder,\" and they can make over 100 different vocal sounds!",
    "Cats spend roughly 70% of their lives asleep.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats can rotate their ears 180 degrees using 32 muscles.",
    "The oldest known pet cat was buried with its owner in Cyprus about 9,500 years ago.",
];

pub const FEATURES: &[&str] = &[
    "Retractable claws for silent hunting",
    "Exceptional balance and agility",
    "Keen night vision and sensitive whiskers",
    "Complex vocal communication",
];

pub const ABOUT: &str = "Cats have been cherished companions for thousands of years. \
These independent and agile creatures have captivated humans with their grace, \
playfulness, and affectionate nature. From ancient Egyptian reverence to modern-day \
internet sensations, cats continue to hold a special place in our hearts and homes.";

/// Number of facts in the ticker.
pub fn fact_count() -> NonZeroUsize {
    NonZeroUsize::new(FACTS.len()).unwrap_or(NonZeroUsize::MIN)
}

/// Returns the fact at `index`, wrapping around the catalog.
pub fn fact(index: usize) -> &'static str {
    FACTS[index % FACTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!FACTS.is_empty());
        assert_eq!(fact_count().get(), FACTS.len());
        assert_eq!(BREEDS.len(), 5);
    }

    #[test]
    fn fact_wraps_out_of_range_index() {
        assert_eq!(fact(FACTS.len()), FACTS[0]);
    }

    #[test]
    fn breed_traits_are_trimmed() {
        let traits: Vec<_> = BREEDS[0].traits().collect();
        assert_eq!(traits, vec!["Vocal", "Affectionate", "Intelligent"]);
    }
}
