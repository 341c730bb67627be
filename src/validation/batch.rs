use crate::models::{BatchEntry, Outcome};
use log::debug;

/// Common surface of the five identifier validators.
///
/// Implementors are stateless unit structs; every call builds a fresh result.
pub trait IdentifierValidator {
    type Info: Outcome;

    /// Short human name used in log lines.
    const NAME: &'static str;

    fn validate(input: Option<&str>) -> Self::Info;

    fn check(input: Option<&str>) -> bool {
        Self::validate(input).is_valid()
    }

    fn mask(input: Option<&str>) -> String;

    fn parse_many<I, S>(inputs: I) -> Vec<BatchEntry<Self::Info>>
    where
        Self: Sized,
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        parse_many::<Self, I, S>(inputs)
    }
}

/// Validates every input in order and pairs it with its result.
///
/// Missing inputs are validated too (and fail with `EMPTY_INPUT`); a failure
/// never stops the run, so the output always has one entry per input.
pub fn parse_many<V, I, S>(inputs: I) -> Vec<BatchEntry<V::Info>>
where
    V: IdentifierValidator,
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    run_batch(V::NAME, inputs, V::validate)
}

/// Batch loop shared by the typed validators and `IdentifierKind`.
pub(crate) fn run_batch<T, I, S, F>(name: &str, inputs: I, validate: F) -> Vec<BatchEntry<T>>
where
    T: Outcome,
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
    F: Fn(Option<&str>) -> T,
{
    let entries: Vec<BatchEntry<T>> = inputs
        .into_iter()
        .map(|input| {
            let input = input.map(|s| s.as_ref().to_string());
            let result = validate(input.as_deref());
            BatchEntry { input, result }
        })
        .collect();

    debug!(
        "{} batch: {} inputs, {} valid",
        name,
        entries.len(),
        entries.iter().filter(|e| e.is_valid()).count()
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;
    use crate::validation::{MobileValidator, TrnValidator};

    fn count_valid<V: IdentifierValidator>(inputs: &[Option<&str>]) -> usize {
        V::parse_many(inputs.iter().copied())
            .iter()
            .filter(|e| e.is_valid())
            .count()
    }

    #[test]
    fn test_generic_over_validators() {
        let inputs = [Some("100123456700003"), Some("0501234567"), None];
        assert_eq!(count_valid::<TrnValidator>(&inputs), 1);
        assert_eq!(count_valid::<MobileValidator>(&inputs), 1);
    }

    #[test]
    fn test_entries_mirror_inner_result() {
        let entries = parse_many::<TrnValidator, _, _>(vec![Some(" "), Some("200123456700003")]);
        assert_eq!(entries[0].error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(entries[0].input.as_deref(), Some(" "));
        assert_eq!(entries[1].error_code(), entries[1].result.error_code());
    }

    #[test]
    fn test_trait_check_and_mask() {
        assert!(TrnValidator::check(Some("100123456700003")));
        assert_eq!(MobileValidator::mask(Some("0551234567")), "+97155****567");
    }

    #[test]
    fn test_run_batch_with_closure() {
        let entries = run_batch("trn", vec![Some("100123456700003"), None], |input| {
            TrnValidator::validate(input)
        });
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_valid());
        assert_eq!(entries[1].error_code(), Some(ErrorCode::EmptyInput));
    }
}
