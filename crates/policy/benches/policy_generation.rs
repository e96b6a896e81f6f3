use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cedarboard_core::{ActionId, ResourceId, RoleId};
use cedarboard_policy::generate;
use cedarboard_rbac::{PolicyStore, Resource, Role};

/// Store with `n` roles, `n` resources, and two grants per (role, resource)
/// pair, so the document grows quadratically with `n`.
fn store_with(n: usize) -> PolicyStore {
    let mut store = PolicyStore::new();

    for r in 0..n {
        store
            .add_role(Role::new(
                RoleId::new(format!("role-{r}")),
                format!("Role {r}"),
                "",
            ))
            .unwrap();
    }
    for x in 0..n {
        store
            .add_resource(Resource::new(
                ResourceId::new(format!("res-{x}")),
                format!("Res {x}"),
                vec![ActionId::new("view"), ActionId::new("update")],
            ))
            .unwrap();
    }
    for r in 0..n {
        for x in 0..n {
            for action in ["view", "update"] {
                store.toggle_permission(
                    RoleId::new(format!("role-{r}")),
                    ResourceId::new(format!("res-{x}")),
                    ActionId::new(action),
                );
            }
        }
    }

    store
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_generation");

    for n in [4usize, 16, 64] {
        let store = store_with(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| generate(black_box(store)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
