use eyre::{eyre, Result};

use seqalign_core_rs::Alignable;

use super::{added_endpoint, Goal, Setup};
use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{Layout, Matrix, UNREACHABLE};
use crate::pairwise::scoring::Scheme;
use crate::pairwise::trace::Tracer;

/// Best scores ending in any state, in a deletion, and in an insertion.
pub(super) struct Matrices<'a, L: Layout> {
    pub main: Matrix<'a, L>,
    pub deletions: Matrix<'a, L>,
    pub insertions: Matrix<'a, L>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    Main,
    Deletion,
    Insertion,
}

pub(super) fn align<S, L, S1, S2>(
    scoring: &S,
    (open, extend): (i32, i32),
    seq1: &S1,
    seq2: &S2,
    setup: Setup,
    matrices: Matrices<'_, L>,
    mut tracer: Tracer,
) -> Result<Alignment>
where
    S: Scheme,
    L: Layout,
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    let Matrices {
        mut main,
        deletions: mut dels,
        insertions: mut ins,
    } = matrices;
    let (len1, len2) = (seq1.len(), seq2.len());
    let layout = *main.layout();

    main.set(0, 0, 0);
    dels.set(0, 0, UNREACHABLE);
    ins.set(0, 0, UNREACHABLE);
    for j in 1..=layout.first_row() {
        let gap = open + extend * (j as i32 - 1);
        main.set(0, j, if setup.bounds.seq2 { gap } else { 0 });
        dels.set(0, j, UNREACHABLE);
        ins.set(0, j, gap);
    }
    for i in 1..=layout.first_column() {
        let gap = open + extend * (i as i32 - 1);
        main.set(i, 0, if setup.bounds.seq1 { gap } else { 0 });
        dels.set(i, 0, gap);
        ins.set(i, 0, UNREACHABLE);
    }

    let reward = scoring.matrix().match_reward();
    let mut best = ((0, 0), 0);
    for i in 0..len1 {
        let code1 = *seq1.at(i);
        let mut row_max = UNREACHABLE;
        for j in layout.columns(i) {
            let deletion = (main.get(i, j + 1) + open).max(dels.get(i, j + 1) + extend);
            let insertion = (main.get(i + 1, j) + open).max(ins.get(i + 1, j) + extend);
            let mut score = (main.get(i, j) + scoring.score(code1, *seq2.at(j)))
                .max(deletion)
                .max(insertion);
            if setup.local {
                score = score.max(0);
            }

            dels.set(i + 1, j + 1, deletion);
            ins.set(i + 1, j + 1, insertion);
            main.set(i + 1, j + 1, score);

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
        Goal::Added { seq1, seq2 } => added_endpoint(&main, len1, len2, seq1, seq2),
    };
    let score = main.get(end.0, end.1);

    let (mut i, mut j) = end;
    let mut state = State::Main;
    loop {
        match state {
            State::Main => {
                let current = main.get(i, j);
                if setup.stops(i, j, current) {
                    break;
                }

                if current == dels.get(i, j) {
                    state = State::Deletion;
                } else if current == ins.get(i, j) {
                    state = State::Insertion;
                } else if i > 0
                    && j > 0
                    && current
                        == main.get(i - 1, j - 1)
                            + scoring.score(*seq1.at(i - 1), *seq2.at(j - 1))
                {
                    tracer.diagonal(i, *seq1.at(i - 1), *seq2.at(j - 1));
                    i -= 1;
                    j -= 1;
                } else {
                    return Err(eyre!("Traceback failed at cell ({}, {})", i, j));
                }
            }
            State::Deletion => {
                if i == 0 {
                    return Err(eyre!("Deletion traceback left the matrix at column {}", j));
                }
                let current = dels.get(i, j);
                tracer.deletion(i, *seq1.at(i - 1));
                if current == dels.get(i - 1, j) + extend {
                    i -= 1;
                } else if current == main.get(i - 1, j) + open {
                    i -= 1;
                    state = State::Main;
                } else {
                    return Err(eyre!("Traceback failed at deletion cell ({}, {})", i, j));
                }
            }
            State::Insertion => {
                if j == 0 {
                    return Err(eyre!("Insertion traceback left the matrix at row {}", i));
                }
                let current = ins.get(i, j);
                tracer.insertion(i, *seq2.at(j - 1));
                if current == ins.get(i, j - 1) + extend {
                    j -= 1;
                } else if current == main.get(i, j - 1) + open {
                    j -= 1;
                    state = State::Main;
                } else {
                    return Err(eyre!("Traceback failed at insertion cell ({}, {})", i, j));
                }
            }
        }
    }

    tracer.finish(score, (i, j), end)
}
