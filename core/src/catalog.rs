use crate::shuffle::rand_unit;

pub const SOURCE_IMAGE_SIZE: u32 = 1280;
pub const DEFAULT_PHOTO_SLUG: &str = "harbor-dawn";

const PHOTO_PICK_SALT: u32 = 0xF0_70;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoEntry {
    pub label: &'static str,
    pub slug: &'static str,
    pub src: &'static str,
    pub size: u32,
}

pub const PHOTO_CATALOG: &[PhotoEntry] = &[
    PhotoEntry {
        label: "Harbor Dawn",
        slug: "harbor-dawn",
        src: "photos/harbor-dawn.png",
        size: SOURCE_IMAGE_SIZE,
    },
    PhotoEntry {
        label: "Cedar Trail",
        slug: "cedar-trail",
        src: "photos/cedar-trail.png",
        size: SOURCE_IMAGE_SIZE,
    },
    PhotoEntry {
        label: "Lantern Row",
        slug: "lantern-row",
        src: "photos/lantern-row.png",
        size: SOURCE_IMAGE_SIZE,
    },
    PhotoEntry {
        label: "Tidepool",
        slug: "tidepool",
        src: "photos/tidepool.png",
        size: SOURCE_IMAGE_SIZE,
    },
    PhotoEntry {
        label: "Market Alley",
        slug: "market-alley",
        src: "photos/market-alley.png",
        size: SOURCE_IMAGE_SIZE,
    },
];

pub fn photo_by_slug(slug: &str) -> Option<&'static PhotoEntry> {
    let trimmed = slug.trim();
    PHOTO_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

// Re-picks until the slug differs from the previous round; the catalog
// holds more than one entry, so the loop ends after ~1 attempt.
pub fn pick_photo(seed: u32, previous_slug: Option<&str>) -> &'static PhotoEntry {
    let count = PHOTO_CATALOG.len();
    let mut salt = 0u32;
    loop {
        let index = (rand_unit(seed, PHOTO_PICK_SALT + salt) * count as f32) as usize;
        let entry = &PHOTO_CATALOG[index.min(count - 1)];
        let repeats = previous_slug
            .map(|slug| slug.eq_ignore_ascii_case(entry.slug))
            .unwrap_or(false);
        if !repeats || count == 1 {
            return entry;
        }
        salt = salt.wrapping_add(1);
    }
}
