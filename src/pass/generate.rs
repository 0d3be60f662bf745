//! Password generation.

use super::{SecretBuf, charset};
use crate::error::{Error, Result};
use crate::rand::{WordSource, rand_below};
use crate::settings::Settings;

/// Generate a single password based on settings.
///
/// The returned buffer has one spare byte reserved for the line terminator.
/// On error every buffer touched so far is wiped before returning.
pub fn generate<R: WordSource + ?Sized>(settings: &Settings, rng: &mut R) -> Result<SecretBuf> {
    let length = settings.pass_length;
    let chars = charset::build(settings);

    if chars.is_empty() && length > 0 {
        return Err(Error::EmptyCharset);
    }
    tracing::debug!(length, charset = chars.len(), "generating password");

    let capacity = length.checked_add(1).ok_or(Error::Alloc(length))?;
    let mut buf = SecretBuf::with_capacity(capacity)?;

    for _ in 0..length {
        let idx = rand_below(rng, chars.len())?;
        buf.push(chars[idx]);
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharClass;
    use crate::rand::OsRandom;
    use crate::rand::test_support::{Failing, Scripted};

    fn settings(length: usize) -> Settings {
        Settings {
            pass_length: length,
            ..Settings::default()
        }
    }

    #[test]
    fn picks_charset_positions_in_order() {
        let s = Settings {
            pass_length: 5,
            uppercase: false,
            numbers: false,
            ..Settings::default()
        };
        let mut src = Scripted::new([0, 1, 2, 25, 27]);
        let pass = generate(&s, &mut src).unwrap();
        assert_eq!(pass.as_bytes(), b"abczb");
    }

    #[test]
    fn default_password_is_22_alphanumerics() {
        let pass = generate(&Settings::default(), &mut OsRandom).unwrap();
        assert_eq!(pass.len(), 22);
        assert!(pass.as_bytes().iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn output_length_and_membership() {
        let s = Settings {
            pass_length: 8,
            numbers: false,
            symbols: true,
            ..Settings::default()
        };
        let chars = charset::build(&s);
        assert_eq!(chars.len(), 84);

        for _ in 0..200 {
            let pass = generate(&s, &mut OsRandom).unwrap();
            assert_eq!(pass.len(), 8);
            assert!(pass.as_bytes().iter().all(|b| chars.contains(b)));
        }
    }

    #[test]
    fn single_class_stays_in_class() {
        for class in CharClass::ALL {
            let mut s = Settings {
                pass_length: 64,
                lowercase: false,
                uppercase: false,
                numbers: false,
                symbols: false,
            };
            s.set(class, true);
            let pass = generate(&s, &mut OsRandom).unwrap();
            assert!(pass.as_bytes().iter().all(|b| class.alphabet().contains(b)));
        }
    }

    #[test]
    fn zero_length_is_empty_and_draws_nothing() {
        let mut src = Failing { calls: 0 };
        let pass = generate(&settings(0), &mut src).unwrap();
        assert_eq!(pass.len(), 0);
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn zero_length_with_no_classes_is_fine() {
        let s = Settings {
            pass_length: 0,
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(generate(&s, &mut Failing { calls: 0 }).unwrap().len(), 0);
    }

    #[test]
    fn no_classes_with_length_is_an_error() {
        let s = Settings {
            pass_length: 12,
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        let mut src = Failing { calls: 0 };
        assert!(matches!(generate(&s, &mut src), Err(Error::EmptyCharset)));
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn no_classes_beats_huge_length() {
        let s = Settings {
            pass_length: usize::MAX,
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        assert!(matches!(
            generate(&s, &mut OsRandom),
            Err(Error::EmptyCharset)
        ));
    }

    #[test]
    fn huge_length_fails_to_allocate() {
        assert!(matches!(
            generate(&settings(usize::MAX), &mut OsRandom),
            Err(Error::Alloc(_))
        ));
        assert!(matches!(
            generate(&settings(usize::MAX - 1), &mut OsRandom),
            Err(Error::Alloc(_))
        ));
    }

    #[test]
    fn source_failure_mid_password_aborts() {
        // three good draws, then the source runs dry
        let mut src = Scripted::new([4, 5, 6]);
        assert!(matches!(
            generate(&settings(10), &mut src),
            Err(Error::Random(_))
        ));
    }
}
