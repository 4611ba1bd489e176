//! Wordlist generator - wires expansion, combination and capping together.

use crate::capper::{Capper, Offer};
use crate::combiner::Combiner;
use crate::config::{GenerationPlan, WordlistRequest, YearsSource};
use crate::error::GenerateError;
use crate::tokens::expand_token;
use crate::wordlist::Wordlist;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// How many candidates are pulled between two cancellation checks.
#[cfg(feature = "async")]
const CANCEL_CHECK_INTERVAL: usize = 4096;

/// Generates a targeted wordlist from personal tokens.
///
/// # Arguments
/// * `tokens` - Personal terms (names, pets, dates)
/// * `years_spec` - `1990-1996,2024` style list; `None` means current year ± 1
/// * `separators` - Strings placed between two token variants
/// * `leet_enabled` - Whether character-substitution variants are generated
/// * `max_size` - Hard cap on the number of entries, at least 1
///
/// # Errors
/// Fails before generating anything on a malformed years or separators
/// specification, a zero `max_size`, or when no usable token remains.
pub fn generate_wordlist<T: AsRef<str>, S: AsRef<str>>(
    tokens: &[T],
    years_spec: Option<&str>,
    separators: &[S],
    leet_enabled: bool,
    max_size: usize,
) -> Result<Wordlist, GenerateError> {
    let request = WordlistRequest {
        years: YearsSource::from(years_spec),
        separators: separators.iter().map(|s| s.as_ref().to_string()).collect(),
        leet: leet_enabled,
        max_size,
        ..WordlistRequest::new(tokens)
    };
    generate(&request)
}

/// Validates `request` and generates its wordlist.
pub fn generate(request: &WordlistRequest) -> Result<Wordlist, GenerateError> {
    let plan = request.validate()?;
    run(&plan, || false)
}

/// Single forward pass over the candidates, stopping at the cap.
///
/// `should_stop` is polled by callers that need cooperative cancellation;
/// returning `true` aborts with no partial result.
fn run<F>(plan: &GenerationPlan, mut should_stop: F) -> Result<Wordlist, GenerateError>
where
    F: FnMut() -> bool,
{
    let variants: Vec<Vec<String>> = plan
        .tokens
        .iter()
        .map(|token| expand_token(token, plan.leet))
        .filter(|set| !set.is_empty())
        .collect();

    let combiner = Combiner::new(&variants, &plan.separators, &plan.years);
    let mut capper = Capper::new(plan.max_size)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generating from {} tokens, {} separators, {} years (at most {} candidates)",
        variants.len(),
        plan.separators.len(),
        plan.years.len(),
        combiner.upper_bound()
    );

    for candidate in combiner.candidates() {
        if should_stop() {
            return Err(GenerateError::Cancelled);
        }
        if capper.offer(candidate) == Offer::Full {
            #[cfg(feature = "tracing")]
            tracing::info!("Wordlist cap of {} reached, generation stopped", capper.max_size());
            break;
        }
    }

    Ok(capper.into_wordlist())
}

/// Generates on a blocking task and sends the result via channel.
///
/// The token is checked cooperatively while candidates are produced; a
/// cancelled run sends [`GenerateError::Cancelled`] and no wordlist.
#[cfg(feature = "async")]
pub async fn generate_wordlist_tx(
    request: WordlistRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<Wordlist, GenerateError>>,
) {
    let result = match request.validate() {
        Ok(plan) => {
            let worker_token = token.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let mut pulled = 0usize;
                run(&plan, || {
                    pulled += 1;
                    pulled % CANCEL_CHECK_INTERVAL == 1 && worker_token.is_cancelled()
                })
            });
            finish_blocking(handle.await)
        }
        Err(e) => Err(e),
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send wordlist generation result: {}", _e);
    }
}

/// Unwraps the blocking task's outcome. A panic in generation is resumed
/// on the caller, never reported as a cancellation.
#[cfg(feature = "async")]
fn finish_blocking(
    joined: Result<Result<Wordlist, GenerateError>, tokio::task::JoinError>,
) -> Result<Wordlist, GenerateError> {
    match joined {
        Ok(result) => result,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist generation task failed: {}", e);
            match e.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                // the runtime dropped the task while shutting down
                Err(_) => Err(GenerateError::Cancelled),
            }
        }
    }
}
