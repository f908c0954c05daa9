//! Week-of-development reference table
//!
//! One canonical row for each gestational week 1 through 40. The table is
//! read-only; [`lookup`] returns a generic row for weeks outside that range.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Number of weeks covered by the table
pub const WEEK_COUNT: u32 = 40;

/// Reference data for one gestational week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInfoRow {
    pub week: u32,
    pub description: Cow<'static, str>,
    pub approximate_size: Cow<'static, str>,
    pub development_note: Cow<'static, str>,
    /// Short display glyph (fruit or vegetable of comparable size)
    pub emblem: Cow<'static, str>,
}

impl WeekInfoRow {
    /// Row used for weeks with no table entry
    pub fn fallback(week: u32) -> Self {
        Self {
            week,
            description: Cow::Owned(format!("Week {}: Stay healthy and hydrated!", week)),
            approximate_size: Cow::Borrowed(""),
            development_note: Cow::Borrowed(""),
            emblem: Cow::Borrowed("👶"),
        }
    }

    /// Whether this row came from the table rather than [`WeekInfoRow::fallback`]
    pub fn is_canonical(&self) -> bool {
        (1..=WEEK_COUNT).contains(&self.week) && !self.development_note.is_empty()
    }
}

const fn row(
    week: u32,
    description: &'static str,
    approximate_size: &'static str,
    emblem: &'static str,
    development_note: &'static str,
) -> WeekInfoRow {
    WeekInfoRow {
        week,
        description: Cow::Borrowed(description),
        approximate_size: Cow::Borrowed(approximate_size),
        development_note: Cow::Borrowed(development_note),
        emblem: Cow::Borrowed(emblem),
    }
}

static WEEKS: [WeekInfoRow; WEEK_COUNT as usize] = [
    row(1, "Your baby is now the size of a poppy seed!", "~0.04 inches, microscopic", "🌱",
        "Fertilization occurs, and the zygote begins rapid cell division."),
    row(2, "Your baby is now the size of a sesame seed!", "~0.1 inches", "⚫",
        "The blastocyst implants in the uterine wall."),
    row(3, "Your baby is now the size of a chia seed!", "~0.15 inches", "🌱",
        "Neural plate forms, marking the beginning of the nervous system."),
    row(4, "Your baby is now the size of an apple seed!", "~0.25 inches", "🍎",
        "Heart begins beating (about 105 bpm) and blood circulation starts."),
    row(5, "Your baby is now the size of a blueberry!", "~0.3 inches", "🫐",
        "Arm and leg buds appear, and major organs begin forming."),
    row(6, "Your baby is now the size of a sweet pea!", "~0.5 inches", "🟢",
        "Facial features start developing, and the brain divides into lobes."),
    row(7, "Your baby is now the size of a raspberry!", "~0.7 inches", "🍓",
        "Fingers and toes begin webbing, and eyelids form."),
    row(8, "Your baby is now the size of a kidney bean!", "~0.9 inches", "🫘",
        "All major organs are present (but immature), and the tail disappears."),
    row(9, "Your baby is now the size of a grape!", "~1 inch, ~0.1 oz", "🍇",
        "Muscles start working, allowing tiny spontaneous movements."),
    row(10, "Your baby is now the size of a kumquat!", "~1.2 inches, ~0.2 oz", "🍊",
        "Critical organ development completes; nails and hair follicles form."),
    row(11, "Your baby is now the size of a fig!", "~1.6 inches, ~0.3 oz", "🍈",
        "The baby can hiccup and make tiny fists; bones begin hardening."),
    row(12, "Your baby is now the size of a lime!", "~2.1 inches, ~0.5 oz", "🍈",
        "Reflexes develop, and the baby responds to touch (though you can't feel it)."),
    row(13, "Your baby is now the size of a peach!", "~2.9 inches, ~0.8 oz", "🍑",
        "Vocal cords form, and unique fingerprints appear on tiny fingers."),
    row(14, "Your baby is now the size of a lemon!", "~3.4 inches, ~1.5 oz", "🍋",
        "The baby starts producing urine and grows fine hair (lanugo)."),
    row(15, "Your baby is now the size of an apple!", "~4 inches, ~2.5 oz", "🍏",
        "Taste buds develop, and legs grow longer than arms."),
    row(16, "Your baby is now the size of an avocado!", "~4.6 inches, ~3.5 oz", "🥑",
        "Eyebrows/lashes grow, and the baby can hear muffled sounds."),
    row(17, "Your baby is now the size of a pear!", "~5.1 inches, ~5 oz", "🍐",
        "Fat begins to form under the skin, smoothing out wrinkles."),
    row(18, "Your baby is now the size of a bell pepper!", "~5.6 inches, ~6.7 oz", "🫑",
        "The baby practices yawning and may start sucking its thumb."),
    row(19, "Your baby is now the size of a mango!", "~6 inches, ~8.5 oz", "🥭",
        "Vernix caseosa (protective waxy coating) covers the skin."),
    row(20, "Your baby is now the size of a banana!", "~6.5 inches, ~10.6 oz", "🍌",
        "Gender is visible on ultrasound; baby may react to loud noises."),
    row(21, "Your baby is now the size of a carrot!", "~10.5 inches, ~12.7 oz", "🥕",
        "Bone marrow starts producing blood cells; movements become coordinated."),
    row(22, "Your baby is now the size of a papaya!", "~11 inches, ~1 pound", "🍈",
        "Eyelids and eyebrows are formed, and the baby is developing more defined sleep-wake cycles."),
    row(23, "Your baby is now the size of a grapefruit!", "~11.4 inches, ~1.1 pounds", "🍊",
        "The baby's hearing improves significantly, and lungs develop blood vessels."),
    row(24, "Your baby is now the size of an ear of corn!", "~12 inches, ~1.3 pounds", "🌽",
        "Taste buds fully form, and the baby's skin becomes less transparent."),
    row(25, "Your baby is now the size of a rutabaga!", "~13.6 inches, ~1.5 pounds", "🥬",
        "Hands are fully developed, and the baby may start sucking their thumb."),
    row(26, "Your baby is now the size of a scallion!", "~14 inches, ~1.7 pounds", "🧅",
        "Eyes begin to open, and the baby responds to light and sound."),
    row(27, "Your baby is now the size of a cauliflower!", "~14.5 inches, ~2 pounds", "🥦",
        "Practices breathing movements and shows more organized brain activity."),
    row(28, "Your baby is now the size of an eggplant!", "~14.8 inches, ~2.2 pounds", "🍆",
        "Eyelashes are visible, and the baby can dream during REM sleep."),
    row(29, "Your baby is now the size of a butternut squash!", "~15.2 inches, ~2.5 pounds", "🎃",
        "Muscles and lungs continue maturing, and kicks become stronger."),
    row(30, "Your baby is now the size of a cabbage!", "~15.7 inches, ~3 pounds", "🥬",
        "Eye coordination improves, and the baby can distinguish light/dark."),
    row(31, "Your baby is now the size of a coconut!", "~16.2 inches, ~3.3 pounds", "🥥",
        "Fat deposits smooth the skin, and the baby practices swallowing."),
    row(32, "Your baby is now the size of a jicama!", "~16.7 inches, ~3.8 pounds", "🍠",
        "Toenails are fully formed, and the baby settles into head-down position."),
    row(33, "Your baby is now the size of a pineapple!", "~17.2 inches, ~4.2 pounds", "🍍",
        "Bones harden (except the skull), and the immune system develops."),
    row(34, "Your baby is now the size of a cantaloupe!", "~17.7 inches, ~4.7 pounds", "🍈",
        "Lanugo (fine hair) begins to disappear, and fingernails reach fingertips."),
    row(35, "Your baby is now the size of a honeydew melon!", "~18.2 inches, ~5.3 pounds", "🍈",
        "Kidneys are fully developed, and the baby's reflexes are coordinated."),
    row(36, "Your baby is now the size of a head of romaine lettuce!", "~18.7 inches, ~6 pounds", "🥬",
        "The baby drops lower in the pelvis and gains about 1/2 pound per week."),
    row(37, "Your baby is now the size of a bunch of Swiss chard!", "~19.1 inches, ~6.3 pounds", "🥬",
        "Lungs are maturing rapidly, and the baby practices breathing motions."),
    row(38, "Your baby is now the size of a leek!", "~19.5 inches, ~6.8 pounds", "🧅",
        "Vernix (waxy coating) thickens, and the brain continues developing."),
    row(39, "Your baby is now the size of a mini watermelon!", "~19.8 inches, ~7.2 pounds", "🍉",
        "The baby's head molds to fit through the birth canal during labor."),
    row(40, "Your baby is now the size of a pumpkin!", "~20.2 inches, ~7.5 pounds", "🎃",
        "All organs are fully developed and ready for life outside the womb."),
];

/// Look up the reference row for a gestational week
///
/// # Arguments
/// * `week` - Completed gestational weeks
///
/// # Returns
/// The table row for weeks 1..=40, otherwise [`WeekInfoRow::fallback`]
pub fn lookup(week: u32) -> WeekInfoRow {
    if (1..=WEEK_COUNT).contains(&week) {
        WEEKS[(week - 1) as usize].clone()
    } else {
        WeekInfoRow::fallback(week)
    }
}
