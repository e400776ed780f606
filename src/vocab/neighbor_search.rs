use fst::Automaton;

/*
    Automaton used to pull every word that is a single substitution away from a query
    word out of the vocabulary FST. Input arrives one byte at a time, so multi-byte
    characters are buffered until they are complete before being compared.
*/

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionState {
    /// Number of characters of the query consumed so far
    pub position: usize,
    /// Number of characters that differed from the query
    pub substitutions: usize,
    /// Bytes of a character that has not been completely read yet
    pending: [u8; 4],
    pending_len: usize,
}

#[derive(Debug, Clone)]
pub struct OneSubstitution {
    /// Characters of the word we are searching around
    query: Vec<char>,
}

impl OneSubstitution {
    pub fn new(word: &str) -> Self {
        Self {
            query: word.chars().collect(),
        }
    }
}

/// Width in bytes of a UTF-8 sequence starting with `lead`
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

impl Automaton for OneSubstitution {
    type State = Option<SubstitutionState>;

    fn start(&self) -> Self::State {
        Some(SubstitutionState::default())
    }

    fn is_match(&self, state: &Self::State) -> bool {
        match state {
            Some(state) => {
                state.pending_len == 0
                    && state.position == self.query.len()
                    && state.substitutions == 1
            }
            None => false,
        }
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        state.as_ref().and_then(|state| {
            let mut next = *state;
            next.pending[next.pending_len] = byte;
            next.pending_len += 1;

            let width = utf8_width(next.pending[0])?;
            if next.pending_len < width {
                return Some(next);
            }
            let letter = std::str::from_utf8(&next.pending[..width])
                .ok()?
                .chars()
                .next()?;
            next.pending_len = 0;

            // Words longer than the query can never match
            let expected = *self.query.get(next.position)?;
            if letter != expected {
                next.substitutions += 1;
                if next.substitutions > 1 {
                    return None;
                }
            }
            next.position += 1;
            Some(next)
        })
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}
