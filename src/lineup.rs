//! The festival lineup demo. Bands are [`Record`]s ranked by popularity and the lineup is a
//! [`Heap`], so the most popular band is always the headliner.

use std::io::{self, BufRead, Write};
use std::num::NonZeroU16;

use rand::Rng;
use tracing::info;

use crate::console::Console;
use crate::heap::{build_heap, sort_descending, Heap, Record};

/// The bands booked before the festival opens, in booking order.
pub const BOOKED_BANDS: [(&str, i32); 3] = [
    ("The Rockers", 85),
    ("The Melodies", 90),
    ("The Groovers", 78),
];

/// Knobs for [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineupConfig {
    /// How many bands to generate for the optimized schedule.
    pub random_bands: usize,
    /// Generated popularities are drawn from `0..max_popularity`.
    pub max_popularity: NonZeroU16,
}

/// The bound the festival uses unless told otherwise.
pub const DEFAULT_MAX_POPULARITY: NonZeroU16 = match NonZeroU16::new(100) {
    Some(max) => max,
    None => panic!("100 is not zero"),
};

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            random_bands: 5,
            max_popularity: DEFAULT_MAX_POPULARITY,
        }
    }
}

/// Makes `count` bands named `Random Band 1` and up with popularities drawn uniformly from
/// `0..max_popularity`.
pub fn random_bands<R>(rng: &mut R, count: usize, max_popularity: NonZeroU16) -> Vec<Record>
where
    R: Rng,
{
    (1..=count)
        .map(|i| {
            Record::new(
                format!("Random Band {}", i),
                i32::from(rng.random_range(0..max_popularity.get())),
            )
        })
        .collect()
}

/// The lineup in slot order, numbered from one.
pub fn render_lineup(lineup: &Heap) -> String {
    let mut rendered = String::from("\tCURRENT LINEUP (heap)\n");
    for (i, band) in lineup.iter().enumerate() {
        rendered.push_str(&format!(
            "{}) Band: {}\n Popularity: {}\n",
            i + 1,
            band.name,
            band.rank
        ));
    }

    rendered
}

/// One `Band: name, Popularity: rank` line per band.
pub fn render_ratings(bands: &[Record]) -> String {
    bands
        .iter()
        .map(|band| format!("Band: {}, Popularity: {}\n", band.name, band.rank))
        .collect()
}

/// Runs the festival: book the known bands one at a time, let the user cancel one, then build an
/// optimized schedule out of randomly rated bands and announce them by popularity.
pub fn run<R, W, G>(console: &mut Console<R, W>, rng: &mut G, config: &LineupConfig) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    console.say("HELLO!\n\nThis is the MUSIC FESTIVAL ORGANIZATION\n")?;

    let mut lineup = Heap::new();
    for (name, popularity) in BOOKED_BANDS {
        lineup.insert(Record::new(name, popularity));
        console.say(format!(
            "This is the band {} with popularity {} added to the lineup.",
            name, popularity
        ))?;
        console.say(render_lineup(&lineup))?;
    }

    let choice = console.ask(&format!(
        "One band has canceled.\nPlease choose the band to cancel (0 - {}): ",
        lineup.len() - 1
    ))?;
    match choice.trim().parse().map(|index| lineup.remove_at(index)) {
        Ok(Ok(band)) => {
            info!(band = %band.name, "band canceled");
            console.say(format!(
                "The band {} with popularity {} has canceled.",
                band.name, band.rank
            ))?;
            console.say(render_lineup(&lineup))?;
        }
        Ok(Err(_)) | Err(_) => console.say("Invalid choice.")?,
    }

    let bands = random_bands(rng, config.random_bands, config.max_popularity);
    console.say(format!(
        "Random list of bands and their ratings:\n{}",
        render_ratings(&bands)
    ))?;

    let mut schedule = build_heap(bands);
    console.say(format!(
        "Heapified lineup for optimized schedule:\n{}",
        render_ratings(&sort_descending(schedule.as_slice()))
    ))?;

    console.say("Announcing headliners:")?;
    loop {
        match schedule.remove_root() {
            Ok(band) => console.say(band)?,
            Err(err) => {
                console.say(format!("Done: {}.", err))?;
                break;
            }
        }
    }

    Ok(())
}
