use crate::errors::errors::Error;

use super::tokens::SYMBOL_LOOKUP;

/// Splits source text into whitespace-delimited words.
///
/// A quoted span is kept as a single atomic word, whitespace and all,
/// with the quote characters included. The word is flushed as soon as the
/// closing quote is seen, so `"hi";` splits into `"hi"` and `;` before
/// the grammar pass even runs.
pub fn split_words(source: &str) -> Result<Vec<String>, Error> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut inside_quotes = false;

    for c in source.chars() {
        if c == '"' {
            inside_quotes = !inside_quotes;
            word.push(c);

            if !inside_quotes {
                words.push(std::mem::take(&mut word));
            }
        } else if inside_quotes {
            word.push(c);
        } else if c.is_whitespace() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
        } else {
            word.push(c);
        }
    }

    if inside_quotes {
        return Err(Error::UnterminatedQuote { context: word });
    }

    if !word.is_empty() {
        words.push(word);
    }

    Ok(words)
}

/// Splits each word into raw lexical units by peeling grammar symbols off
/// identifier/literal runs, e.g. `return;` -> `return`, `;`.
///
/// Two-character symbols are checked before single characters, so `a<=b`
/// yields `a`, `<=`, `b` and never `a`, `<`, `=`, `b`. Words that are an
/// atomic quoted string pass through unscanned: punctuation inside a
/// string literal must never be split out.
pub fn split_grammar(words: &[String]) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();

    for word in words {
        if word.starts_with('"') {
            units.push(word.clone());
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            // check for two-character symbols first
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();

                if SYMBOL_LOOKUP.contains_key(pair.as_str()) {
                    if !current.is_empty() {
                        units.push(std::mem::take(&mut current));
                    }
                    units.push(pair);
                    i += 2;
                    continue;
                }
            }

            let single = chars[i].to_string();

            if SYMBOL_LOOKUP.contains_key(single.as_str()) {
                if !current.is_empty() {
                    units.push(std::mem::take(&mut current));
                }
                units.push(single);
            } else {
                current.push(chars[i]);
            }

            i += 1;
        }

        if !current.is_empty() {
            units.push(std::mem::take(&mut current));
        }
    }

    units
}
