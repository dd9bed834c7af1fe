//! The fortune composition engine.
//!
//! Every selection except `random_variable` draws from a local RNG seeded
//! with a SHA-256 hash of (date, MBTI, sign, animal, time slot), so the same
//! person gets the same fortune all day within a time slot. `random_variable`
//! is picked last from an entropy-seeded RNG and is the one field that varies
//! between calls. Each call constructs its own generators; no process-wide
//! RNG state is touched, so concurrent calls cannot perturb each other.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::calendar::{day_type, season_for, special_days, time_slot_for};
use crate::domain::holiday::HolidayCalendar;
use crate::domain::templates;
use crate::domain::types::{
    Animal, CompatTier, DayType, Mbti, SpecialDay, TimeSlot, WeatherCondition, ZodiacSign,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub tier: CompatTier,
    pub comment: String,
}

/// A fully composed fortune, valid for the (date, person, time slot) it was
/// computed for. Not persisted anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct FortuneResult {
    pub main_line: String,
    pub morning_tip: String,
    pub morning_sign_tip: String,
    pub lunch_tip: String,
    pub afternoon_tip: String,
    pub afternoon_sign_tip: String,
    pub evening_tip: String,
    pub warning: String,
    pub lucky_item: String,
    pub lucky_item_reason: String,
    pub season_vibe: String,
    pub random_variable: String,
    pub time_intro: String,
    pub time_slot: TimeSlot,
    pub day_type: DayType,
    pub holiday_name: Option<String>,
    pub compatibility: Compatibility,
    pub special_days: Vec<SpecialDay>,
    pub special_messages: Vec<String>,
}

/// Stable per-day seed: same date + same person attributes + same time slot
/// hash to the same value.
fn daily_seed(
    today: NaiveDate,
    mbti: Mbti,
    zodiac: ZodiacSign,
    animal: Animal,
    slot: TimeSlot,
) -> u64 {
    let key = format!(
        "{}-{}-{}-{}-{}",
        today.format("%Y-%m-%d"),
        mbti.code(),
        zodiac.as_str(),
        animal.as_str(),
        slot.as_str()
    );
    let hash = Sha256::digest(key.as_bytes());
    u64::from_be_bytes(hash[0..8].try_into().expect("digest is 32 bytes"))
}

fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng)
        .copied()
        .expect("template lists are validated non-empty")
}

pub fn compose(
    mbti: Mbti,
    zodiac: ZodiacSign,
    animal: Animal,
    birth_date: NaiveDate,
    weather: WeatherCondition,
    today: NaiveDate,
    now: NaiveDateTime,
    holidays: &dyn HolidayCalendar,
) -> FortuneResult {
    let slot = time_slot_for(now.hour());
    let (day, holiday_name) = day_type(today, holidays);
    let season = season_for(today);
    let specials = special_days(birth_date, today, holidays);

    let seed = daily_seed(today, mbti, zodiac, animal, slot);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::debug!(
        %mbti,
        zodiac = %zodiac,
        animal = %animal,
        slot = %slot,
        seed,
        "Composing fortune"
    );

    let (tier, comment) = templates::compatibility(animal, zodiac);

    // Selection order is fixed: reordering changes every seeded result.
    let mbti_fortune = pick(&mut rng, templates::mbti_fortune(mbti));
    let animal_energy = pick(&mut rng, templates::animal_energy(animal));
    let morning_tip = pick(&mut rng, templates::day_type_morning(day));
    let morning_sign_tip = pick(&mut rng, templates::zodiac_morning(zodiac));
    let afternoon_tip = pick(&mut rng, templates::day_type_afternoon(day));
    let afternoon_sign_tip = pick(&mut rng, templates::zodiac_afternoon(zodiac));
    let evening_tip = pick(&mut rng, templates::day_type_evening(day));
    let mbti_warning = pick(&mut rng, templates::mbti_warning(mbti));
    let animal_warning = pick(&mut rng, templates::animal_warning(animal));
    let lunch_tip = pick(&mut rng, templates::weather_lunch(weather));
    let lucky_item = pick(&mut rng, templates::LUCKY_ITEMS);
    let season_vibe = pick(&mut rng, templates::season_vibe(season));
    let time_intro = pick(&mut rng, templates::time_intro(slot));
    let special_messages: Vec<String> = specials
        .iter()
        .map(|flag| pick(&mut rng, templates::special_day(*flag)).to_string())
        .collect();

    let main_line = match tier {
        CompatTier::Good => format!("{mbti_fortune}, {animal_energy}"),
        CompatTier::Caution => format!("{mbti_fortune} (단, 오늘은 신중하게)"),
        CompatTier::Neutral => mbti_fortune.to_string(),
    };

    let warning = match tier {
        CompatTier::Caution => format!("{mbti_warning}. 특히 오늘은 {comment}"),
        _ => format!("{mbti_warning}. 또한 {animal_warning}"),
    };

    // The one deliberate break from determinism, strictly after every seeded
    // pick so it cannot shift them.
    let mut entropy_rng = StdRng::from_entropy();
    let random_variable = pick(&mut entropy_rng, templates::RANDOM_VARIABLES);

    FortuneResult {
        main_line,
        morning_tip: morning_tip.to_string(),
        morning_sign_tip: morning_sign_tip.to_string(),
        lunch_tip: lunch_tip.to_string(),
        afternoon_tip: afternoon_tip.to_string(),
        afternoon_sign_tip: afternoon_sign_tip.to_string(),
        evening_tip: evening_tip.to_string(),
        warning,
        lucky_item: lucky_item.to_string(),
        lucky_item_reason: templates::lucky_item_reason(animal),
        season_vibe: season_vibe.to_string(),
        random_variable: random_variable.to_string(),
        time_intro: time_intro.to_string(),
        time_slot: slot,
        day_type: day,
        holiday_name,
        compatibility: Compatibility {
            tier,
            comment: comment.to_string(),
        },
        special_days: specials,
        special_messages,
    }
}
