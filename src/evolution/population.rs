//! One generation's worth of individuals and the operators applied to it.

use super::gene::Mutation;
use super::individual::Individual;
use crate::random::permutation;
use rand::Rng;

/// An ordered collection of individuals.
///
/// Order carries no meaning except right after [`rank`](Population::rank),
/// when index 0 holds the best (lowest) result.
#[derive(Debug, Clone)]
pub struct Population<I: Individual> {
    members: Vec<I>,
}

impl<I: Individual> Population<I> {
    /// Wraps an existing set of individuals.
    pub fn from_members(members: Vec<I>) -> Self {
        Self { members }
    }

    /// Creates `size` individuals with `create`.
    pub fn generate<R, F>(size: usize, rng: &mut R, mut create: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> I,
    {
        let members = (0..size).map(|_| create(rng)).collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[I] {
        &self.members
    }

    pub fn into_members(self) -> Vec<I> {
        self.members
    }

    /// Returns the first member, which is the best after ranking.
    pub fn best(&self) -> Option<&I> {
        self.members.first()
    }

    /// Recomputes every member's result.
    pub fn evaluate(&mut self) {
        for ind in self.members.iter_mut() {
            ind.update_result();
        }
    }

    /// Sorts ascending by result.
    ///
    /// The sort is stable and uses `f64::total_cmp`, so equal results keep
    /// their relative order and NaN results sink to the end.
    pub fn rank(&mut self) {
        self.members.sort_by(|a, b| a.result().total_cmp(&b.result()));
    }

    /// Whether results are non-decreasing by index.
    pub fn is_ranked(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| w[0].result().total_cmp(&w[1].result()).is_le())
    }

    /// Builds the next generation by biased resampling of a ranked population.
    ///
    /// The first `elite_count` members form the elite, the remainder the rest.
    /// `len - elite_count` slots are filled with copies of uniformly drawn
    /// elite members, then `elite_count` slots with copies of uniformly drawn
    /// rest members. Draws are with replacement. The result has the same
    /// length as `self`; elite-drawn copies come first.
    ///
    /// # Panics
    /// Panics if `elite_count` is `0` or not less than the population size.
    pub fn select<R: Rng>(&self, elite_count: usize, rng: &mut R) -> Self {
        let n = self.members.len();
        assert!(
            elite_count > 0 && elite_count < n,
            "elite_count must be in 1..{n}, got {elite_count}"
        );

        let mut next = Vec::with_capacity(n);
        for _ in 0..n - elite_count {
            next.push(self.members[rng.random_range(0..elite_count)].clone());
        }
        for _ in 0..elite_count {
            next.push(self.members[rng.random_range(elite_count..n)].clone());
        }
        Self { members: next }
    }

    /// Crosses over `pair_count` disjoint random pairs in place.
    ///
    /// A random permutation of the indices is split into consecutive pairs
    /// `(perm[2i], perm[2i + 1])`; each pair is replaced by the pair its
    /// crossover returns. No index takes part in more than one crossover.
    ///
    /// # Panics
    /// Panics if `2 * pair_count` exceeds the population size.
    pub fn recombine<R: Rng>(&mut self, pair_count: usize, rng: &mut R) {
        let n = self.members.len();
        assert!(
            2 * pair_count <= n,
            "cannot form {pair_count} disjoint pairs from {n} individuals"
        );

        let perm = permutation(n, rng);
        for pair in perm.chunks_exact(2).take(pair_count) {
            let (a, b) = (pair[0], pair[1]);
            let left = self.members[a].clone();
            let right = self.members[b].clone();
            let (left, right) = left.crossover(right, rng);
            self.members[a] = left;
            self.members[b] = right;
        }
    }

    /// Mutates every member.
    pub fn mutate<R: Rng>(&mut self, mutation: &Mutation, rng: &mut R) {
        for ind in self.members.iter_mut() {
            ind.mutate(mutation, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::gene::{Bounds, Gene};
    use crate::evolution::individual::{SingleVariable, TwoVariable};
    use crate::evolution::objective;
    use crate::random::create_rng;

    /// 100 individuals with x = 0.00, 0.01, ..., 0.99, evaluated.
    fn graded(n: usize) -> Population<SingleVariable> {
        let members = (0..n)
            .map(|i| {
                let gene = Gene::with_value(i as f64 / n as f64, Bounds::UNIT).unwrap();
                let mut ind = SingleVariable::from_gene(gene, objective::f);
                ind.update_result();
                ind
            })
            .collect();
        Population::from_members(members)
    }

    #[test]
    fn test_rank_non_decreasing() {
        let mut rng = create_rng(42);
        let mut pop = Population::generate(200, &mut rng, |r| TwoVariable::for_g(r));
        pop.evaluate();
        pop.rank();
        assert!(pop.is_ranked());
        let results: Vec<f64> = pop.members().iter().map(|i| i.result()).collect();
        for w in results.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_rank_is_stable() {
        let same = |v: f64| {
            let mut ind =
                SingleVariable::from_gene(Gene::with_value(v, Bounds::UNIT).unwrap(), |_| 1.0);
            ind.update_result();
            ind
        };
        let mut pop = Population::from_members(vec![same(0.3), same(0.1), same(0.2)]);
        pop.rank();
        let xs: Vec<f64> = pop.members().iter().map(|i| i.x().value()).collect();
        assert_eq!(xs, vec![0.3, 0.1, 0.2]);
    }

    #[test]
    fn test_rank_puts_nan_last() {
        let nan_or_x = |x: f64| if x > 0.5 { f64::NAN } else { x };
        let members = [0.9, 0.2, 0.1]
            .iter()
            .map(|&v| {
                let mut ind =
                    SingleVariable::from_gene(Gene::with_value(v, Bounds::UNIT).unwrap(), nan_or_x);
                ind.update_result();
                ind
            })
            .collect();
        let mut pop = Population::from_members(members);
        pop.rank();
        assert_eq!(pop.best().unwrap().x().value(), 0.1);
        assert!(pop.members()[2].result().is_nan());
    }

    #[test]
    fn test_select_size_and_proportions() {
        let mut rng = create_rng(42);
        let pop = graded(100);
        assert!(pop.is_ranked());

        let next = pop.select(10, &mut rng);
        assert_eq!(next.len(), 100);

        // x < 0.1 identifies the prior elite, x >= 0.1 the prior rest
        let from_elite = next.members()[..90]
            .iter()
            .filter(|i| i.x().value() < 0.1)
            .count();
        let from_rest = next.members()[90..]
            .iter()
            .filter(|i| i.x().value() >= 0.1)
            .count();
        assert_eq!(from_elite, 90);
        assert_eq!(from_rest, 10);
    }

    #[test]
    fn test_select_samples_with_replacement() {
        let mut rng = create_rng(42);
        let pop = graded(100);
        let next = pop.select(10, &mut rng);
        let mut distinct: Vec<u64> = next.members()[..90]
            .iter()
            .map(|i| i.x().value().to_bits())
            .collect();
        distinct.sort_unstable();
        distinct.dedup();
        // 90 draws from 10 candidates must repeat
        assert!(distinct.len() <= 10);
    }

    #[test]
    #[should_panic(expected = "elite_count must be in")]
    fn test_select_rejects_full_elite() {
        let mut rng = create_rng(42);
        graded(10).select(10, &mut rng);
    }

    #[test]
    fn test_recombine_preserves_gene_multiset() {
        let mut rng = create_rng(42);
        let mut pop = Population::generate(100, &mut rng, |r| TwoVariable::for_g(r));

        let collect = |p: &Population<TwoVariable>| {
            let mut xs: Vec<u64> = p.members().iter().map(|i| i.x().value().to_bits()).collect();
            let mut ys: Vec<u64> = p.members().iter().map(|i| i.y().value().to_bits()).collect();
            xs.sort_unstable();
            ys.sort_unstable();
            (xs, ys)
        };

        let before = collect(&pop);
        pop.recombine(10, &mut rng);
        assert_eq!(pop.len(), 100);
        assert_eq!(collect(&pop), before);
    }

    #[test]
    fn test_recombine_touches_at_most_two_per_pair() {
        let mut rng = create_rng(42);
        let mut pop = Population::generate(100, &mut rng, |r| TwoVariable::for_g(r));
        let before: Vec<(f64, f64)> = pop
            .members()
            .iter()
            .map(|i| (i.x().value(), i.y().value()))
            .collect();
        pop.recombine(10, &mut rng);
        let changed = pop
            .members()
            .iter()
            .zip(before.iter())
            .filter(|(i, &(x, y))| i.x().value() != x || i.y().value() != y)
            .count();
        assert!(changed <= 20, "changed {changed} individuals");
    }

    #[test]
    #[should_panic(expected = "disjoint pairs")]
    fn test_recombine_rejects_too_many_pairs() {
        let mut rng = create_rng(42);
        let mut pop = Population::generate(10, &mut rng, |r| TwoVariable::for_g(r));
        pop.recombine(6, &mut rng);
    }

    #[test]
    fn test_mutate_all_members() {
        let mut rng = create_rng(42);
        let mut pop = graded(100);
        let always = Mutation {
            probability: 1.0,
            ..Mutation::default()
        };
        pop.mutate(&always, &mut rng);
        for ind in pop.members() {
            assert!(Bounds::UNIT.contains(ind.x().value()));
        }
    }
}
