use super::hit::{MappingHit, SeedRecord};
use crate::params::MapperParams;

/// Island that is still open for new records.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Slot {
    first: usize,
    last: usize,
    last_seed: usize,
    last_offset: i64,
    score: i32,
}

/// Finalized island: indices of its representative records (one per seed) and its score.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Island {
    records: Vec<usize>,
    seeds: (usize, usize),
    score: i32,
}

impl Island {
    fn overlaps(&self, other: &Island) -> bool {
        self.seeds.0 <= other.seeds.1 && other.seeds.0 <= self.seeds.1
    }
}

/// Groups the seed records of a reference into islands of consistent diagonal offsets.
///
/// Records are streamed in the seed order through a fixed number of live slots. A record joins the
/// live island with the largest positive score gain; a record that fits no island opens a new one,
/// evicting the island with the oldest last seed (lower score on ties, then the first slot).
/// Overlapping islands are untangled afterwards in favor of the higher scoring ones.
///
/// The accumulator keeps scratch buffers between calls and must not be shared between threads.
#[derive(Clone, Debug)]
pub struct Accumulator {
    params: MapperParams,
    slots: Vec<Option<Slot>>,
    closed: Vec<Slot>,
    islands: Vec<Option<Island>>,
    path: Vec<usize>,
}

impl Accumulator {
    pub fn new(params: &MapperParams) -> Self {
        Self {
            params: params.clone(),
            slots: vec![None; params.slot_count],
            closed: Vec::new(),
            islands: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Score gain of extending an island by a record `seeds` seeds apart with the given offset shift.
    #[inline(always)]
    fn gain(&self, seeds: usize, shift: u64) -> i32 {
        self.params.match_score
            + (seeds as i32 - 1) * self.params.mismatch_score
            + shift as i32 * self.params.offset_shift_score
    }

    fn close(&mut self, slot: Slot) {
        if slot.score >= self.params.absolute_min_cluster_score {
            self.closed.push(slot);
        }
    }

    fn partition(&mut self, records: &[SeedRecord]) {
        let tolerance = self.params.max_cluster_indels as u64;
        self.closed.clear();
        self.slots.iter_mut().for_each(|x| *x = None);

        for (ind, record) in records.iter().enumerate() {
            let mut matched = false;
            let mut best: Option<(usize, i32)> = None;
            for (slotind, slot) in self.slots.iter().enumerate() {
                let Some(slot) = slot else { continue };
                let shift = slot.last_offset.abs_diff(record.offset);
                if shift > tolerance {
                    continue;
                }
                if slot.last_seed == record.seed {
                    matched = true;
                    continue;
                }
                let gain = self.gain(record.seed - slot.last_seed, shift);
                if gain > 0 && best.is_none_or(|(_, x)| gain > x) {
                    best = Some((slotind, gain));
                }
            }

            if let Some((slotind, gain)) = best {
                if let Some(slot) = self.slots[slotind].as_mut() {
                    slot.last = ind;
                    slot.last_seed = record.seed;
                    slot.last_offset = record.offset;
                    slot.score += gain;
                }
                continue;
            }
            if matched {
                continue;
            }

            let slotind = match self.slots.iter().position(Option::is_none) {
                Some(free) => free,
                None => {
                    let evicted = self
                        .slots
                        .iter()
                        .enumerate()
                        .filter_map(|(ind, x)| x.map(|x| (x.last_seed, x.score, ind)))
                        .min()
                        .map_or(0, |(_, _, ind)| ind);
                    if let Some(slot) = self.slots[evicted].take() {
                        self.close(slot);
                    }
                    evicted
                }
            };
            self.slots[slotind] = Some(Slot {
                first: ind,
                last: ind,
                last_seed: record.seed,
                last_offset: record.offset,
                score: self.params.match_score,
            });
        }

        for ind in 0..self.slots.len() {
            if let Some(slot) = self.slots[ind].take() {
                self.close(slot);
            }
        }
    }

    /// Greedy walk from `start` to `last`, picking in each later seed the record closest to the
    /// current offset. Fills `self.path` and returns the walk score.
    fn walk(&mut self, records: &[SeedRecord], start: usize, last: usize) -> i32 {
        let tolerance = self.params.max_cluster_indels as u64;
        self.path.clear();
        self.path.push(start);

        let (mut offset, mut seed) = (records[start].offset, records[start].seed);
        let mut score = self.params.match_score;
        let mut ind = start + 1;
        while ind <= last && records[ind].seed <= seed {
            ind += 1;
        }
        while ind <= last {
            let group = records[ind].seed;
            let mut closest = (u64::MAX, ind);
            while ind <= last && records[ind].seed == group {
                let shift = records[ind].offset.abs_diff(offset);
                if shift < closest.0 {
                    closest = (shift, ind);
                }
                ind += 1;
            }
            if closest.0 > tolerance {
                continue;
            }
            score += self.gain(group - seed, closest.0);
            offset = records[closest.1].offset;
            seed = group;
            self.path.push(closest.1);
        }
        score
    }

    /// Picks the best representative records of a closed island.
    fn refine(&mut self, records: &[SeedRecord], slot: Slot) -> Option<Island> {
        let tolerance = self.params.max_cluster_indels as u64;
        let (offset, seed) = (records[slot.first].offset, records[slot.first].seed);

        let mut best: Option<Island> = None;
        for start in slot.first..=slot.last {
            if records[start].seed != seed {
                break;
            }
            if records[start].offset.abs_diff(offset) > tolerance {
                continue;
            }
            let score = self.walk(records, start, slot.last);
            if best.as_ref().is_none_or(|x| score > x.score) {
                best = Some(self.island(records, self.path.clone(), score));
            }
        }
        best.filter(|x| x.score >= self.params.absolute_min_cluster_score)
    }

    fn island(&self, records: &[SeedRecord], path: Vec<usize>, score: i32) -> Island {
        let first = path.first().map_or(0, |x| records[*x].seed);
        let last = path.last().map_or(0, |x| records[*x].seed);
        Island {
            records: path,
            seeds: (first, last),
            score,
        }
    }

    /// Score of an island made of the given representative records.
    fn rescore(&self, records: &[SeedRecord], path: &[usize]) -> i32 {
        path.windows(2).fold(self.params.match_score, |score, pair| {
            let (prev, next) = (records[pair[0]], records[pair[1]]);
            score + self.gain(next.seed - prev.seed, next.offset.abs_diff(prev.offset))
        })
    }

    /// Part of the island with seeds satisfying the predicate, scored no higher than the island.
    fn retain(
        &self,
        records: &[SeedRecord],
        island: &Island,
        keep: impl Fn(usize) -> bool,
    ) -> Option<Island> {
        let path: Vec<usize> = island
            .records
            .iter()
            .copied()
            .filter(|x| keep(records[*x].seed))
            .collect();
        if path.is_empty() {
            return None;
        }
        let score = self.rescore(records, &path).min(island.score);
        Some(self.island(records, path, score))
    }

    /// Resolves the overlap of an island with a higher scoring one.
    fn resolve(&self, records: &[SeedRecord], island: Island, higher: &Island) -> Option<Island> {
        if !island.overlaps(higher) {
            return Some(island);
        }
        let ((first, last), (hfirst, hlast)) = (island.seeds, higher.seeds);
        let resolved = if hfirst <= first && last <= hlast {
            None
        } else if first < hfirst && hlast < last {
            let left = self.retain(records, &island, |seed| seed < hfirst);
            let right = self.retain(records, &island, |seed| seed > hlast);
            match (left, right) {
                (Some(left), Some(right)) if right.score > left.score => Some(right),
                (Some(left), _) => Some(left),
                (None, right) => right,
            }
        } else if first < hfirst {
            self.retain(records, &island, |seed| seed < hfirst)
        } else {
            self.retain(records, &island, |seed| seed > hlast)
        };
        resolved.filter(|x| x.score >= self.params.absolute_min_cluster_score)
    }

    /// Removes overlaps between islands, visiting them from the highest score down.
    fn untangle(&mut self, records: &[SeedRecord]) {
        let mut order: Vec<usize> = (0..self.islands.len()).collect();
        order.sort_by_key(|ind| {
            std::cmp::Reverse(self.islands[*ind].as_ref().map_or(i32::MIN, |x| x.score))
        });

        let mut accepted: Vec<usize> = Vec::with_capacity(order.len());
        for ind in order {
            let mut current = self.islands[ind].take();
            for higher in &accepted {
                let Some(island) = current.take() else { break };
                current = match self.islands[*higher].as_ref() {
                    Some(higher) => self.resolve(records, island, higher),
                    None => Some(island),
                };
            }
            if current.is_some() {
                self.islands[ind] = current;
                accepted.push(ind);
            }
        }
    }

    /// Islands of the records after refinement but before untangling.
    pub(crate) fn islands(&mut self, records: &[SeedRecord]) -> Vec<Island> {
        self.partition(records);
        let mut closed = std::mem::take(&mut self.closed);
        closed.sort_by_key(|x| x.first);
        let islands = closed
            .iter()
            .filter_map(|slot| self.refine(records, *slot))
            .collect();
        self.closed = closed;
        islands
    }

    /// Clusters the records of one reference, ordered by the seed index, into a mapping hit.
    /// Returns `None` if no island reaches the minimal cluster score.
    pub fn cluster(&mut self, reference: usize, records: &[SeedRecord]) -> Option<MappingHit> {
        let islands = self.islands(records);
        self.islands.clear();
        self.islands.extend(islands.into_iter().map(Some));
        self.untangle(records);

        let mut survivors: Vec<Island> = self.islands.drain(..).flatten().collect();
        if survivors.is_empty() {
            return None;
        }
        survivors.sort_by_key(|x| std::cmp::Reverse(x.score));
        survivors.truncate(self.params.max_clusters);
        survivors.sort_by_key(|x| x.seeds.0);

        let mut hit = Vec::with_capacity(survivors.iter().map(|x| x.records.len()).sum());
        let mut boundaries = Vec::with_capacity(survivors.len() - 1);
        for island in &survivors {
            if !hit.is_empty() {
                boundaries.push(hit.len());
            }
            hit.extend(island.records.iter().map(|x| records[*x]));
        }
        let score = survivors.iter().map(|x| x.score).sum::<i32>()
            + self.params.extra_cluster_score * (survivors.len() as i32 - 1);
        Some(MappingHit::new(reference, hit, boundaries, score))
    }
}
