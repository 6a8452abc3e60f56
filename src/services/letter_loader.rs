use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use log::{debug, info};
use rand::Rng;

use crate::error::LoadError;
use crate::models::{Rack, RACK_SIZE};
use crate::utils::select_random_from_bag;

/// Letter point values plus the weighted bag racks are drawn from
#[derive(Debug, Default)]
pub struct LetterInventory {
    values: HashMap<char, u32>,
    bag: Vec<char>,
}

impl LetterInventory {
    /// Load letter info from `file_path`.
    ///
    /// Each line reads `<point_value> <letter><count> ...`, e.g. `1 A9 E12`.
    pub fn load(file_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let inventory = Self::from_reader(io::BufReader::new(file), path)?;

        info!(
            "Loaded {} letter values and a bag of {} tiles from {}",
            inventory.values.len(),
            inventory.bag.len(),
            path.display()
        );
        Ok(inventory)
    }

    /// Parse letter info from `reader`; `path` is only used to label errors.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, LoadError> {
        let mut inventory = LetterInventory::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LoadError::from_io(path, e))?;
            let parse_err = |reason: String| LoadError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };

            let mut tokens = line.split_whitespace();
            let Some(value_token) = tokens.next() else {
                continue;
            };
            let point_value: u32 = value_token
                .parse()
                .map_err(|_| parse_err(format!("bad point value '{}'", value_token)))?;

            for token in tokens {
                let mut chars = token.chars();
                let Some(letter) = chars.next() else {
                    continue;
                };
                let count: usize = chars
                    .as_str()
                    .parse()
                    .map_err(|_| parse_err(format!("bad letter count in '{}'", token)))?;

                inventory.bag.extend(std::iter::repeat(letter).take(count));
                inventory.values.insert(letter, point_value);
            }
        }

        if inventory.bag.is_empty() {
            return Err(LoadError::EmptyBag { path: path.to_path_buf() });
        }
        Ok(inventory)
    }

    /// Draw a rack using the thread-local RNG
    pub fn draw_rack(&self) -> Rack {
        self.draw_rack_with(&mut rand::thread_rng())
    }

    /// Draw `RACK_SIZE` letters, each an independent pick from the whole bag.
    /// Tiles are never removed, so a letter can appear more often than its bag count.
    pub fn draw_rack_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Rack {
        let rack = Rack::new(select_random_from_bag(&self.bag, RACK_SIZE, rng));
        debug!("Drew rack {}", rack);
        rack
    }

    pub fn value_of(&self, letter: char) -> Option<u32> {
        self.values.get(&letter).copied()
    }

    pub fn values(&self) -> &HashMap<char, u32> {
        &self.values
    }

    /// Number of tiles per letter in the bag
    pub fn bag_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &letter in &self.bag {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }

    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }
}
