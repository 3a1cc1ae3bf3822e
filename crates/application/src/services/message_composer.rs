//! Message composer
//!
//! Turns two weather readings into a playful comparison text. Phrasing is
//! picked from fixed template sets through an injected [`RandomSource`], so
//! a seeded source always reproduces the same message.

use domain::{ComparisonMessage, TemperatureUnit, WeatherReading};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::random::RandomSource;

/// Feels-like gap (°F scale) above which the wind-chill line becomes eligible
const FEELS_LIKE_THRESHOLD_F: f64 = 40.0;
/// Probability that an eligible feels-like line is included
const FEELS_LIKE_PROBABILITY: f64 = 0.5;

/// Size of the temperature gap, measured home minus away on the °F scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTier {
    /// More than 45°
    Extreme,
    /// More than 35°
    Big,
    /// More than 25°
    Moderate,
    /// Home warmer by 25° or less
    Close,
    /// Same rounded temperature
    Equal,
    /// Away location is warmer
    Reversal,
}

impl DeltaTier {
    /// Tier for a delta already expressed in Fahrenheit degrees
    #[must_use]
    pub fn for_delta(delta_f: f64) -> Self {
        if delta_f > 45.0 {
            Self::Extreme
        } else if delta_f > 35.0 {
            Self::Big
        } else if delta_f > 25.0 {
            Self::Moderate
        } else if delta_f > 0.0 {
            Self::Close
        } else if delta_f < 0.0 {
            Self::Reversal
        } else {
            Self::Equal
        }
    }
}

/// Rounded, display-ready numbers shared by all templates
#[derive(Debug)]
struct Comparison<'a> {
    home: &'a str,
    away: &'a str,
    /// e.g. "68°F"
    home_temp: String,
    away_temp: String,
    /// Absolute rounded difference in the display unit, e.g. "40°"
    gap: String,
    tier: DeltaTier,
    feels_like: Option<(String, String)>,
}

impl<'a> Comparison<'a> {
    fn new(home: &'a WeatherReading, away: &'a WeatherReading) -> Self {
        let unit = home.unit();
        let home_temp = home.rounded_temperature();
        let away_temp = round(away.unit().convert(away.temperature(), unit));
        let delta = home_temp.saturating_sub(away_temp);

        #[allow(clippy::cast_precision_loss)] // whole-degree deltas
        let tier = DeltaTier::for_delta(unit.delta_in_fahrenheit(delta as f64));

        let feels_like = match (home.feels_like(), away.feels_like()) {
            (Some(h), Some(a)) => {
                let h = round(h);
                let a = round(away.unit().convert(a, unit));
                #[allow(clippy::cast_precision_loss)]
                let gap_f = unit.delta_in_fahrenheit(h.saturating_sub(a) as f64);
                (gap_f > FEELS_LIKE_THRESHOLD_F)
                    .then(|| (degrees(h, unit), degrees(a, unit)))
            },
            _ => None,
        };

        Self {
            home: home.location().short_name(),
            away: away.location().short_name(),
            home_temp: degrees(home_temp, unit),
            away_temp: degrees(away_temp, unit),
            gap: format!("{}°", delta.unsigned_abs()),
            tier,
            feels_like,
        }
    }
}

/// `as` saturates, so out-of-range values clamp instead of wrapping
#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i64 {
    value.round() as i64
}

fn degrees(value: i64, unit: TemperatureUnit) -> String {
    format!("{value}{}", unit.symbol())
}

/// Composes comparison messages from a pair of readings
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageComposer;

impl MessageComposer {
    pub const fn new() -> Self {
        Self
    }

    /// Compose the message for `home` versus `away`
    ///
    /// Total for any two readings; fails only when one is missing.
    #[instrument(skip_all)]
    pub fn compose(
        &self,
        home: Option<&WeatherReading>,
        away: Option<&WeatherReading>,
        rng: &mut dyn RandomSource,
    ) -> Result<ComparisonMessage, ApplicationError> {
        let (home, away) = match (home, away) {
            (Some(home), Some(away)) => (home, away),
            (None, _) => {
                return Err(ApplicationError::Composition(
                    "home weather reading is missing".to_string(),
                ));
            },
            (_, None) => {
                return Err(ApplicationError::Composition(
                    "away weather reading is missing".to_string(),
                ));
            },
        };

        let cmp = Comparison::new(home, away);
        debug!(tier = ?cmp.tier, gap = %cmp.gap, "Composing comparison");

        let mut lines = vec![choose(openers(&cmp), rng), String::new()];
        lines.push(choose(temperature_lines(&cmp), rng));

        if let Some((home_feels, away_feels)) = &cmp.feels_like {
            if rng.chance(FEELS_LIKE_PROBABILITY) {
                lines.push(format!(
                    "(Feels like {home_feels} here vs {away_feels} there... wind chill is your nemesis!) 🌬️"
                ));
            }
        }

        let quips = condition_quips(home, away);
        if !quips.is_empty() {
            lines.push(choose(quips, rng));
        }

        lines.push(format!("\n{}", choose(closers(), rng)));

        ComparisonMessage::new(lines.join("\n")).map_err(ApplicationError::from)
    }
}

fn choose(mut options: Vec<String>, rng: &mut dyn RandomSource) -> String {
    let index = rng.pick(options.len());
    if index < options.len() {
        options.swap_remove(index)
    } else {
        String::new()
    }
}

fn openers(c: &Comparison<'_>) -> Vec<String> {
    vec![
        format!("☀️ *{} Weather Report* ☀️", c.home),
        "🌴 Greetings from paradise! 🌴".to_string(),
        "📍 Live from the Best Coast:".to_string(),
        "🏖️ Your daily dose of sunshine envy:".to_string(),
        format!("☀️ Breaking news from {}:", c.home),
        "🌊 Surf's up and so is the temperature!".to_string(),
        "🎯 Your daily weather flex:".to_string(),
    ]
}

fn temperature_lines(c: &Comparison<'_>) -> Vec<String> {
    let (home, away, h, a, gap) = (c.home, c.away, &c.home_temp, &c.away_temp, &c.gap);
    match c.tier {
        DeltaTier::Extreme => vec![
            format!(
                "It's a balmy {h} here while you're enjoying the arctic tundra at {a}. That's a {gap} difference! 🥶❄️"
            ),
            format!(
                "We're absolutely SUFFERING at {h}. I know, I know... you've got it worse at {a}. 😂"
            ),
            format!(
                "It's {h} here. You're at {a}. Math says that's {gap} warmer, but who's counting? (Me. I'm counting.) 😎"
            ),
            format!(
                "Temperature check: {home} {h} ☀️ | {away} {a} 🧊 | Difference: 'Why do you still live there?' degrees"
            ),
        ],
        DeltaTier::Big => vec![
            format!("{home}: {h} ☀️ | {away}: {a} 🥶 (only {gap} apart, totally not rubbing it in)"),
            format!("It's {gap} warmer here ({h} vs your {a}). That's a whole different season! 🌞❄️"),
            format!("We hit {h} today. You're at {a}. I'm sure the cold builds character or something! 💪🥶"),
        ],
        DeltaTier::Moderate => vec![
            format!(
                "Today's forecast: {h} in {home}, {a} in {away}. Almost twins! (If one twin lives in paradise) 😏"
            ),
            format!("{h} vs {a}. See? Only {gap} apart. Basically neighbors! 🌴🧊"),
        ],
        DeltaTier::Close => vec![
            format!("We're at {h}, you're at {a}. Practically the same! 😅"),
            format!("Shockingly close today: {h} here, {a} there. Only {gap} different!"),
        ],
        DeltaTier::Equal => vec![
            format!("Dead heat: {h} in {home} and {a} in {away}. Suspicious. 🤨"),
            format!("{h} here, {a} there. Identical! The universe is messing with me. 🙃"),
        ],
        DeltaTier::Reversal => vec![
            format!("Plot twist: {away} is {gap} warmer today ({a} vs my {h}). Enjoy it while it lasts. 😤"),
            format!("Hold on. {a} in {away} and only {h} in {home}? I'd like to speak to the manager. 🌧️"),
            format!("You win today, {a} to my {h}. Don't get used to it. 😒"),
        ],
    }
}

fn condition_quips(home: &WeatherReading, away: &WeatherReading) -> Vec<String> {
    let away_condition = away.condition();
    let home_condition = home.condition();
    let mut quips: Vec<String> = Vec::new();

    if away_condition.is_snowy() {
        quips.extend([
            "I'd send you some sunshine but it doesn't ship well. ☀️📦".to_string(),
            "Hope you're enjoying that 'winter wonderland' experience! I might hit the beach later. 🏖️"
                .to_string(),
            "Snow day for you, beach day for me? Life's wild! 🤷‍♂️⛄".to_string(),
            "Remember when you said you 'love the seasons'? How's that going? ⛄❄️".to_string(),
        ]);
    } else if away_condition.is_rainy() {
        quips.extend([
            "At least your cold is hydrated! 🌧️".to_string(),
            format!("Nothing says home like cold rain in {}! 🌧️😬", away.location().short_name()),
        ]);
    } else if away_condition.is_cloudy() {
        quips.push("Cloudy with a chance of regretting your life choices? ☁️".to_string());
    }

    if home_condition.is_clear() {
        quips.push("Not a cloud in the sky here! Debating between beach or pool. 😎☀️".to_string());
    } else if home_condition.is_partly_cloudy() {
        quips.push("We've got a few clouds. It's basically suffering. 😅☁️".to_string());
    }

    quips
}

fn closers() -> Vec<String> {
    [
        "Think of it as character building! 💪",
        "But hey, fall foliage is pretty... in 8 months! 🍂",
        "You chose this! Well, someone did. 😂",
        "Spring is only... *checks calendar* ...a few months away! 🌸",
        "At least your heating bill keeps the economy going! 💸",
        "Stay warm, buddy! ❄️ (I'll be wearing shorts)",
        "Remember: You can always visit! 🛫☀️",
        "On the bright side... okay I got nothing. Stay strong! 💪",
        "Just remember: it's a dry cold! Oh wait... 🤔",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
