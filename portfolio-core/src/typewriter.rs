//! Rotating role headline that types, holds, erases and moves on

/// Delay between keystrokes.
pub const TYPE_TICK_MS: u32 = 50;
/// Pause with the full phrase visible.
pub const HOLD_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Typing,
    Holding,
    Erasing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    stage: Stage,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            stage: Stage::Typing,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Currently visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Advance one step; returns the delay before the next step.
    pub fn tick(&mut self) -> u32 {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return HOLD_MS;
        };
        let len = phrase.chars().count();
        match self.stage {
            Stage::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len {
                    self.stage = Stage::Holding;
                    HOLD_MS
                } else {
                    TYPE_TICK_MS
                }
            }
            Stage::Typing | Stage::Holding => {
                self.stage = Stage::Erasing;
                TYPE_TICK_MS
            }
            Stage::Erasing if self.shown > 0 => {
                self.shown -= 1;
                TYPE_TICK_MS
            }
            Stage::Erasing => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.stage = Stage::Typing;
                TYPE_TICK_MS
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> Typewriter {
        Typewriter::new(vec!["ab".into(), "xyz".into()])
    }

    #[test]
    fn types_then_holds() {
        let mut tw = writer();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), TYPE_TICK_MS);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), HOLD_MS);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.stage(), Stage::Holding);
    }

    #[test]
    fn erases_and_moves_to_next_phrase_then_loops() {
        let mut tw = writer();
        for _ in 0..2 {
            tw.tick();
        }
        tw.tick(); // hold -> erase
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.phrase_index(), 1);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "xyz");
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["héllo".into()]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.tick(), HOLD_MS);
        assert_eq!(tw.text(), "");
    }
}
