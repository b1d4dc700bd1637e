//! Uniform random quote selection with optional theme filtering.

use rand::Rng;
use tracing::info;

use crate::core::models::{ALL_THEMES, Quote};
use crate::errors::QuoteError;

/// Uniform random source yielding values in `[0, 1)`.
///
/// Abstracted so tests can inject a deterministic source and assert exact
/// index selection.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Narrows `pool` per the theme filter and picks one element uniformly at
/// random. `None` or the case-sensitive `"All"` sentinel leave the pool
/// unfiltered; any other value matches themes case-insensitively and
/// exactly.
///
/// # Errors
///
/// Fails with [`QuoteError::EmptyPool`] when the candidate pool is empty,
/// either because the filter matched nothing or because `pool` itself was
/// empty.
pub fn select_random<'a>(
    pool: &'a [Quote],
    filter: Option<&str>,
    source: &mut dyn RandomSource,
) -> Result<&'a Quote, QuoteError> {
    let candidates: Vec<&Quote> = match filter {
        Some(theme) if theme != ALL_THEMES => {
            pool.iter().filter(|q| q.matches_theme(theme)).collect()
        }
        _ => pool.iter().collect(),
    };

    if candidates.is_empty() {
        return Err(QuoteError::EmptyPool {
            theme: filter.filter(|t| *t != ALL_THEMES).map(ToString::to_string),
        });
    }

    // floor(unit * n) over [0, 1) lands in [0, n); clamp keeps an
    // out-of-contract draw of exactly 1.0 in range.
    let n = candidates.len();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((source.next_unit() * n as f64).floor() as usize).min(n - 1);

    info!(candidates = n, index, theme = ?filter, "Selected random quote");
    Ok(candidates[index])
}

/// In-process equivalent of the read endpoint: one random quote for an
/// optional theme, drawn from the thread-local source.
///
/// # Errors
///
/// Fails with [`QuoteError::EmptyPool`] when no quote matches.
pub fn random_quote(pool: &[Quote], filter: Option<&str>) -> Result<Quote, QuoteError> {
    select_random(pool, filter, &mut ThreadRngSource).cloned()
}
