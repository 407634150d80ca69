use eyre::{eyre, Result};

use seqalign_core_rs::Alignable;

use super::{added_endpoint, Goal, Setup};
use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{Layout, Matrix, UNREACHABLE};
use crate::pairwise::scoring::Scheme;
use crate::pairwise::trace::Tracer;

pub(super) fn align<S, L, S1, S2>(
    scoring: &S,
    gap: i32,
    seq1: &S1,
    seq2: &S2,
    setup: Setup,
    mut matrix: Matrix<'_, L>,
    mut tracer: Tracer,
) -> Result<Alignment>
where
    S: Scheme,
    L: Layout,
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let layout = *matrix.layout();

    matrix.set(0, 0, 0);
    for j in 1..=layout.first_row() {
        let score = if setup.bounds.seq2 { gap * j as i32 } else { 0 };
        matrix.set(0, j, score);
    }
    for i in 1..=layout.first_column() {
        let score = if setup.bounds.seq1 { gap * i as i32 } else { 0 };
        matrix.set(i, 0, score);
    }

    let reward = scoring.matrix().match_reward();
    let mut best = ((0, 0), 0);
    for i in 0..len1 {
        let code1 = *seq1.at(i);
        let mut row_max = UNREACHABLE;
        for j in layout.columns(i) {
            let mut score = (matrix.get(i, j) + scoring.score(code1, *seq2.at(j)))
                .max(matrix.get(i, j + 1) + gap)
                .max(matrix.get(i + 1, j) + gap);
            if setup.local {
                score = score.max(0);
            }
            matrix.set(i + 1, j + 1, score);

            if score > best.1 {
                best = ((i + 1, j + 1), score);
            }
            row_max = row_max.max(score);
        }

        if let Goal::Best {
            stop_penalty: Some(stop),
        } = setup.goal
        {
            if row_max - i as i32 * reward < stop {
                break;
            }
        }
    }

    let end = match setup.goal {
        Goal::Corner => (len1, len2),
        Goal::Best { .. } => best.0,
        Goal::Added { seq1, seq2 } => added_endpoint(&matrix, len1, len2, seq1, seq2),
    };
    let score = matrix.get(end.0, end.1);

    let (mut i, mut j) = end;
    loop {
        let current = matrix.get(i, j);
        if setup.stops(i, j, current) {
            break;
        }

        if i > 0 && j > 0 {
            let (code1, code2) = (*seq1.at(i - 1), *seq2.at(j - 1));
            if current == matrix.get(i - 1, j - 1) + scoring.score(code1, code2) {
                tracer.diagonal(i, code1, code2);
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && current == matrix.get(i - 1, j) + gap {
            tracer.deletion(i, *seq1.at(i - 1));
            i -= 1;
        } else if j > 0 && current == matrix.get(i, j - 1) + gap {
            tracer.insertion(i, *seq2.at(j - 1));
            j -= 1;
        } else {
            return Err(eyre!("Traceback failed at cell ({}, {})", i, j));
        }
    }

    tracer.finish(score, (i, j), end)
}
