//! Boosting: a learned token is emitted twice, adjacently, so a
//! frequency-weighted sampler favours it.

use timbre_core::Lexicon;

/// Rebuild every category of `composed`, following each token that appears
/// in the same category of `learned` with a second copy.
pub fn boost_learned(composed: &Lexicon, learned: &Lexicon) -> Lexicon {
    Lexicon::from_fn(|category| {
        let reinforced = learned.get(category);
        let mut out = Vec::with_capacity(composed.get(category).len() + reinforced.len());
        for token in composed.get(category) {
            out.push(token.clone());
            if reinforced.contains(token) {
                out.push(token.clone());
            }
        }
        out
    })
}
