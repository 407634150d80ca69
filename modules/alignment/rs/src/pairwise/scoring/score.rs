use eyre::{eyre, Result};

use seqalign_core_rs::{Mutation, Mutations};

use super::{Gaps, Scheme};

/// Score of the alignment described by the edit script over a reference window of length `len1`.
/// The substitution matrix must reward all matches equally.
pub fn calculate_score<S: Scheme>(scoring: &S, len1: usize, mutations: &Mutations) -> Result<i32> {
    let reward = scoring.matrix().uniform_match().ok_or_else(|| {
        eyre!("Score recalculation requires a substitution matrix with a uniform match score")
    })?;

    let mut score = reward * len1 as i32;
    let mut previous: Option<&Mutation> = None;
    for mutation in mutations {
        score += match *mutation {
            Mutation::Substitution { from, to, .. } => scoring.score(from, to) - reward,
            Mutation::Deletion { pos, .. } => {
                let extends = matches!(
                    previous,
                    Some(Mutation::Deletion { pos: prev, .. }) if prev + 1 == pos
                );
                gap(scoring.gaps(), extends) - reward
            }
            Mutation::Insertion { pos, .. } => {
                let extends = matches!(
                    previous,
                    Some(Mutation::Insertion { pos: prev, .. }) if *prev == pos
                );
                gap(scoring.gaps(), extends)
            }
        };
        previous = Some(mutation);
    }
    Ok(score)
}

#[inline(always)]
fn gap(gaps: Gaps, extends: bool) -> i32 {
    match gaps {
        Gaps::Linear(gap) => gap,
        Gaps::Affine { extend, .. } if extends => extend,
        Gaps::Affine { open, .. } => open,
    }
}
