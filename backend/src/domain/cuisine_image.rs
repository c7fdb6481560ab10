//! Deterministic cuisine photo selection.
//!
//! Each cuisine has a small gallery; the restaurant name picks the entry so
//! the same restaurant always shows the same photo.

use super::restaurant::Cuisine;

macro_rules! unsplash {
    ($id:literal) => {
        concat!(
            "https://images.unsplash.com/photo-",
            $id,
            "?w=400&h=300&fit=crop&auto=format"
        )
    };
}

const ITALIAN: &[&str] = &[
    unsplash!("1565299624946-b28f40a0ca4b"),
    unsplash!("1551782450-a2132b4ba21d"),
    unsplash!("1589302168068-964664d93dc0"),
    unsplash!("1574071318508-1cdbab80d002"),
    unsplash!("1563379091339-03246963d96c"),
];

const JAPANESE: &[&str] = &[
    unsplash!("1579584425555-c3ce17fd4351"),
    unsplash!("1569718212165-3a8278d5f624"),
    unsplash!("1617196034796-73dfa7b1fd56"),
    unsplash!("1555939594-58d7cb561ad1"),
    unsplash!("1563612116625-3012372fccce"),
];

const MEXICAN: &[&str] = &[
    unsplash!("1565299507177-b0ac66763828"),
    unsplash!("1626700051175-6818013e1d4f"),
    unsplash!("1565299585323-38174c4a6234"),
    unsplash!("1599974579688-8dbdd335c77f"),
    unsplash!("1582169296194-854173ef7d9b"),
];

const CHINESE: &[&str] = &[
    unsplash!("1526318896980-cf78c088247c"),
    unsplash!("1455619452474-d2be8b1e70cd"),
    unsplash!("1563245372-f21724e3856d"),
    unsplash!("1512058564366-18510be2db19"),
    unsplash!("1596040033229-a9821ebd058d"),
];

const INDIAN: &[&str] = &[
    unsplash!("1565557623262-b51c2513a641"),
    unsplash!("1628294895950-9805252327bc"),
    unsplash!("1567188040759-fb8a883dc6d8"),
    unsplash!("1631452180519-c014fe946bc7"),
    unsplash!("1574653853027-5e4e654de9a4"),
];

const THAI: &[&str] = &[
    unsplash!("1559847844-5315695dadae"),
    unsplash!("1552611052-33e04de081de"),
    unsplash!("1582878826629-29b7ad1cdc43"),
    unsplash!("1569562211093-4ed0d0758f12"),
    unsplash!("1596040033229-a9821ebd058d"),
];

const AMERICAN: &[&str] = &[
    unsplash!("1568901346375-23c9450c58cd"),
    unsplash!("1565299624946-b28f40a0ca4b"),
    unsplash!("1555939594-58d7cb561ad1"),
    unsplash!("1571091718767-18b5b1457add"),
    unsplash!("1630384060421-cb20d0e0649d"),
];

const FRENCH: &[&str] = &[
    unsplash!("1571877227200-a0d98ea607e9"),
    unsplash!("1578662996442-48f60103fc96"),
    unsplash!("1565299624946-b28f40a0ca4b"),
    unsplash!("1574071318508-1cdbab80d002"),
    unsplash!("1563379091339-03246963d96c"),
];

const MEDITERRANEAN: &[&str] = &[
    unsplash!("1540420773420-3366772f4999"),
    unsplash!("1571877227200-a0d98ea607e9"),
    unsplash!("1565299624946-b28f40a0ca4b"),
    unsplash!("1574071318508-1cdbab80d002"),
    unsplash!("1563379091339-03246963d96c"),
];

const KOREAN: &[&str] = &[
    unsplash!("1598511757337-fe2cafc31ba0"),
    unsplash!("1569562211093-4ed0d0758f12"),
    unsplash!("1582878826629-29b7ad1cdc43"),
    unsplash!("1596040033229-a9821ebd058d"),
    unsplash!("1552611052-33e04de081de"),
];

const GENERAL: &[&str] = &[
    unsplash!("1565299624946-b28f40a0ca4b"),
    unsplash!("1571877227200-a0d98ea607e9"),
    unsplash!("1540420773420-3366772f4999"),
    unsplash!("1574071318508-1cdbab80d002"),
    unsplash!("1563379091339-03246963d96c"),
];

fn gallery(cuisine: Cuisine) -> &'static [&'static str] {
    match cuisine {
        Cuisine::Italian => ITALIAN,
        Cuisine::Japanese => JAPANESE,
        Cuisine::Mexican => MEXICAN,
        Cuisine::Chinese => CHINESE,
        Cuisine::Indian => INDIAN,
        Cuisine::Thai => THAI,
        Cuisine::American => AMERICAN,
        Cuisine::French => FRENCH,
        Cuisine::Mediterranean => MEDITERRANEAN,
        Cuisine::Korean => KOREAN,
        _ => GENERAL,
    }
}

/// Sum of the name's UTF-16 code units.
fn name_hash(name: &str) -> u64 {
    name.encode_utf16().map(u64::from).sum()
}

/// Pick the photo URL for a restaurant.
///
/// # Examples
/// ```
/// use dining_backend::domain::{Cuisine, cuisine_image};
///
/// let first = cuisine_image(Cuisine::Japanese, "Sakura Sushi");
/// assert_eq!(first, cuisine_image(Cuisine::Japanese, "Sakura Sushi"));
/// assert!(first.starts_with("https://images.unsplash.com/"));
/// ```
pub fn cuisine_image(cuisine: Cuisine, name: &str) -> &'static str {
    let images = gallery(cuisine);
    let len = images.len() as u64;
    name_hash(name)
        .checked_rem(len)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| images.get(index))
        .copied()
        .unwrap_or(unsplash!("1565299624946-b28f40a0ca4b"))
}
