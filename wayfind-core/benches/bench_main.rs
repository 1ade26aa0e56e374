use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wayfind_core::prelude::*;

const SIDE: u32 = 60;

/// Square grid of waypoints with two-way walkways, every seventh segment
/// inaccessible, and a named location in each corner
fn grid_campus() -> CampusModel {
    let id = |row: u32, col: u32| format!("{row}:{col}");

    let mut nodes = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let mut node = Node::new(id(row, col), f64::from(row), f64::from(col));
            if (row == 0 || row == SIDE - 1) && (col == 0 || col == SIDE - 1) {
                node = node.with_name(format!("Corner {row}-{col}"));
            }
            nodes.push(node);
        }
    }

    let mut edges = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let neighbors = [(row + 1, col), (row, col + 1)];
            for (next_row, next_col) in neighbors {
                if next_row >= SIDE || next_col >= SIDE {
                    continue;
                }
                let weight = f64::from((row * 31 + col * 17) % 9 + 1);
                let edge = Edge::new(id(row, col), id(next_row, next_col), weight)
                    .with_accessible((row + col) % 7 != 0);
                edges.push(edge.reversed());
                edges.push(edge);
            }
        }
    }

    CampusModel::new(CampusGraph::build(nodes, edges).expect("grid campus is consistent"))
}

fn bench_algorithms(c: &mut Criterion) {
    let model = grid_campus();
    let start = "Corner 0-0";
    let end = format!("Corner {0}-{0}", SIDE - 1);

    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("route_{algorithm}"), |b| {
            b.iter(|| {
                model
                    .find_route(black_box(start), black_box(&end), algorithm, false)
                    .expect("corners are known locations")
            });
        });
    }

    c.bench_function("route_weighted_accessible", |b| {
        b.iter(|| {
            model
                .find_route(black_box(start), black_box(&end), Algorithm::Weighted, true)
                .expect("corners are known locations")
        });
    });
}

fn bench_matrix(c: &mut Criterion) {
    let model = grid_campus();
    let names: Vec<&str> = model.names().names().collect();

    c.bench_function("route_matrix_corners", |b| {
        b.iter(|| route_matrix(&model, black_box(&names), Algorithm::Weighted, false));
    });
}

criterion_group!(benches, bench_algorithms, bench_matrix);
criterion_main!(benches);
