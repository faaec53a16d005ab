//! Dependency ordering of rules (Kahn's algorithm over rule ids).

use crate::error::DependencyError;
use crate::model::RuleId;
use crate::schema::ValidatedPolicy;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Rules in the order they must run: every rule after all of its dependencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOrder {
    order: Vec<RuleId>,
}

impl ExecutionOrder {
    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[RuleId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Resolve `depends_on` names and sort topologically.
///
/// Among rules that become ready together, the earlier-declared rule runs first.
pub fn resolve_order(validated: &ValidatedPolicy<'_>) -> Result<ExecutionOrder, DependencyError> {
    let deps = resolve_dependencies(validated)?;
    let n = deps.len();

    let mut in_degree: Vec<usize> = deps.iter().map(Vec::len).collect();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (rule, rule_deps) in deps.iter().enumerate() {
        for dep in rule_deps {
            dependents[dep.index()].push(rule);
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, deg)| **deg == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(node)) = ready.pop() {
        order.push(RuleId::new(node));
        for &next in &dependents[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    if order.len() != n {
        return Err(DependencyError::Cycle {
            path: find_cycle(validated, &deps, &in_degree),
        });
    }

    Ok(ExecutionOrder { order })
}

/// Map each rule's dependency names to ids, dropping repeats within one rule.
fn resolve_dependencies(
    validated: &ValidatedPolicy<'_>,
) -> Result<Vec<Vec<RuleId>>, DependencyError> {
    validated
        .ids()
        .map(|id| -> Result<Vec<RuleId>, DependencyError> {
            let rule = validated.rule(id);
            let mut resolved: Vec<RuleId> = Vec::with_capacity(rule.dependencies.len());
            for name in &rule.dependencies {
                let dep = validated.id_of(name).ok_or_else(|| {
                    DependencyError::UnknownDependency {
                        rule: rule.name.clone(),
                        dependency: name.clone(),
                    }
                })?;
                if !resolved.contains(&dep) {
                    resolved.push(dep);
                }
            }
            Ok(resolved)
        })
        .collect()
}

/// Walk unresolved rules along their unresolved dependencies until one repeats.
///
/// Every rule left with a non-zero in-degree still has an unresolved dependency, so the walk
/// always closes a cycle.
fn find_cycle(
    validated: &ValidatedPolicy<'_>,
    deps: &[Vec<RuleId>],
    in_degree: &[usize],
) -> Vec<String> {
    let stuck = |id: &RuleId| in_degree[id.index()] > 0;

    let Some(start) = validated.ids().find(stuck) else {
        return Vec::new();
    };

    let mut path: Vec<RuleId> = vec![start];
    let mut current = start;
    loop {
        let Some(next) = deps[current.index()].iter().copied().find(stuck) else {
            break;
        };
        if let Some(pos) = path.iter().position(|&seen| seen == next) {
            path.drain(..pos);
            path.push(next);
            break;
        }
        path.push(next);
        current = next;
    }

    path.into_iter()
        .map(|id| validated.rule(id).name.clone())
        .collect()
}
