//! Enumeration of satisfying tuples

use itertools::Itertools;

use crate::csp::{Csp, Tuple, VarId};
use crate::puzzle::Value;

/// The fixed domain of each scope variable, in scope order
pub fn scope_domains<'a>(csp: &'a Csp, scope: &[VarId]) -> Vec<&'a [Value]> {
    scope.iter().map(|&var| csp.variable(var).domain()).collect()
}

/// Enumerates the cross product of `domains` and keeps every tuple accepted by
/// `predicate`. Tuples are produced in lexicographic domain order.
pub fn satisfying_tuples<F>(domains: &[&[Value]], mut predicate: F) -> Vec<Tuple>
where
    F: FnMut(&[Value]) -> bool,
{
    if domains.is_empty() {
        return Vec::new();
    }
    domains
        .iter()
        .map(|domain| domain.iter().copied())
        .multi_cartesian_product()
        .filter(|tuple| predicate(tuple))
        .map(Vec::into_boxed_slice)
        .collect()
}

/// Tuples of the cross product of `domains` in which no value repeats.
///
/// Equivalent to filtering `satisfying_tuples` with an all-different predicate,
/// but abandons a prefix as soon as it repeats a value.
pub fn all_different_tuples(domains: &[&[Value]]) -> Vec<Tuple> {
    let mut tuples = Vec::new();
    if !domains.is_empty() {
        let mut prefix = Vec::with_capacity(domains.len());
        all_different_next(domains, &mut prefix, &mut tuples);
    }
    tuples
}

fn all_different_next(domains: &[&[Value]], prefix: &mut Vec<Value>, tuples: &mut Vec<Tuple>) {
    let i = prefix.len();
    if i == domains.len() {
        tuples.push(prefix.clone().into_boxed_slice());
        return;
    }
    for &value in domains[i] {
        if prefix.contains(&value) {
            continue;
        }
        prefix.push(value);
        all_different_next(domains, prefix, tuples);
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::{all_different_tuples, satisfying_tuples};
    use itertools::Itertools;

    fn to_vecs(tuples: Vec<Box<[i32]>>) -> Vec<Vec<i32>> {
        tuples.into_iter().map(|t| t.into_vec()).collect()
    }

    #[test]
    fn cross_product_order() {
        let tuples = satisfying_tuples(&[&[1, 2], &[3, 4]], |_| true);
        assert_eq!(
            vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]],
            to_vecs(tuples)
        );
    }

    #[test]
    fn predicate_filters() {
        let tuples = satisfying_tuples(&[&[1, 2, 3], &[1, 2, 3], &[1, 2, 3]], |t| {
            t.iter().sum::<i32>() == 8
        });
        assert_eq!(
            vec![vec![2, 3, 3], vec![3, 2, 3], vec![3, 3, 2]],
            to_vecs(tuples)
        );
    }

    #[test]
    fn empty_scope_or_domain() {
        assert!(satisfying_tuples(&[], |_| true).is_empty());
        assert!(satisfying_tuples(&[&[1, 2], &[]], |_| true).is_empty());
        assert!(all_different_tuples(&[]).is_empty());
    }

    #[test]
    fn all_different_matches_filtered_product() {
        let domains: [&[i32]; 3] = [&[1, 2, 3], &[2, 3], &[1, 2, 3, 4]];
        let expected = satisfying_tuples(&domains, |t| t.iter().unique().count() == t.len());
        assert_eq!(to_vecs(expected), to_vecs(all_different_tuples(&domains)));
    }

    #[test]
    fn all_different_permutations() {
        let domain = [1, 2, 3, 4];
        let tuples = all_different_tuples(&[&domain, &domain, &domain, &domain]);
        assert_eq!(24, tuples.len());
    }
}
