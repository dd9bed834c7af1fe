use anyhow::{bail, Context};
use chrono::{Datelike, FixedOffset, NaiveDate, Utc};
use nunchi_radar::config::config;
use nunchi_radar::domain::calendar::{animal_year_for, check_birth_date, zodiac_sign_for};
use nunchi_radar::domain::lunar::to_lunar;
use nunchi_radar::domain::templates;
use nunchi_radar::domain::types::{Mbti, WeatherCondition};
use nunchi_radar::domain::weather::WeatherReport;
use nunchi_radar::share::{share_text, weekday_kr};
use nunchi_radar::{compose, KoreanHolidays};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let conf = config();
    templates::validate().context("template bank failed validation")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut as_json = false;
    for arg in &args {
        match arg.as_str() {
            "--json" => as_json = true,
            _ => positional.push(arg.as_str()),
        }
    }

    let (birth_arg, mbti_arg) = match positional.as_slice() {
        [birth, mbti, ..] => (*birth, *mbti),
        _ => bail!("usage: nunchi-radar <birth-date YYYY-MM-DD> <MBTI> [weather] [--json]"),
    };

    let birth_date = NaiveDate::parse_from_str(birth_arg, "%Y-%m-%d")
        .with_context(|| format!("invalid birth date: {birth_arg}"))?;
    check_birth_date(birth_date)?;
    let mbti: Mbti = mbti_arg.parse()?;

    // Anything unrecognized (including the collaborator's failure string)
    // lands on the cloudy templates.
    let weather = match positional.get(2) {
        Some(s) => WeatherCondition::from_report(s),
        None => WeatherReport::fallback().condition,
    };

    let kst = FixedOffset::east_opt(9 * 3600).expect("KST offset is valid");
    let now_kst = Utc::now().with_timezone(&kst);
    let today = now_kst.date_naive();
    let now = now_kst.naive_local();

    let zodiac = zodiac_sign_for(birth_date.day(), birth_date.month());
    let animal = animal_year_for(birth_date);
    tracing::info!(%mbti, zodiac = %zodiac, animal = %animal, weather = %weather, "Analyzing");

    let holidays = KoreanHolidays::new();
    let fortune = compose(mbti, zodiac, animal, birth_date, weather, today, now, &holidays);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&fortune)?);
        return Ok(());
    }

    println!(
        "📡 {} | {} ({}) {}",
        conf.app_name,
        today.format("%m/%d"),
        weekday_kr(today),
        fortune.day_type
    );
    if let Some(name) = &fortune.holiday_name {
        println!("🎌 오늘은 {name}");
    }
    println!(
        "{} {} | {} {}띠 | 날씨 {}",
        zodiac.icon(),
        zodiac,
        animal.icon(),
        animal,
        weather
    );
    if let Some(lunar_birth) = to_lunar(birth_date) {
        println!(
            "🌕 음력 생일: {}-{:02}-{:02}",
            lunar_birth.year, lunar_birth.month, lunar_birth.day
        );
    }
    println!();

    for message in &fortune.special_messages {
        println!("✨ {message}");
    }
    if !fortune.special_messages.is_empty() {
        println!();
    }

    println!("✅ {}", fortune.time_intro);
    println!();
    println!("🔮 오늘 한줄: {}", fortune.main_line);
    println!(
        "{} 띠×별자리 궁합: {} - {}",
        fortune.compatibility.tier.icon(),
        fortune.compatibility.tier,
        fortune.compatibility.comment
    );
    println!("🌤️ 오늘의 컨디션: {}", fortune.season_vibe);
    println!();
    println!("🌅 오전: {}", fortune.morning_tip);
    println!("   {} 오전 기운: {}", zodiac, fortune.morning_sign_tip);
    println!("🍱 점심: {}", fortune.lunch_tip);
    println!("🌆 오후: {}", fortune.afternoon_tip);
    println!("   {} 오후 기운: {}", zodiac, fortune.afternoon_sign_tip);
    println!("🌙 퇴근 후: {}", fortune.evening_tip);
    println!();
    println!("⚠️ 오늘의 주의보: {}", fortune.warning);
    println!("🎲 오늘의 변수: {}", fortune.random_variable);
    println!("🍀 행운템: {} ({} 아이템)", fortune.lucky_item, fortune.lucky_item_reason);
    println!();
    println!("📋 공유용 텍스트");
    println!("{}", share_text(&fortune, today, &conf.app_name, &conf.share_url));

    Ok(())
}
