use kcluster::*;
use rand::prelude::*;

fn main() -> Result<(), KMeansError> {
    let (sample_cnt, k, max_iter) = (500, 5, 300);

    let mut rnd = StdRng::seed_from_u64(1337);
    let points: Vec<[f64; 2]> = (0..sample_cnt)
        .map(|_| [rnd.gen_range(0.0, 1.0), rnd.gen_range(0.0, 1.0)])
        .collect();

    let conf = KMeansConfig::build()
        .random_generator(rnd)
        .empty_cluster_policy(EmptyClusterPolicy::ReseedFarthest)
        .build();
    let result = cluster(&points, k, &InitMethod::FarthestPoint, max_iter, &conf)?;

    for (ci, (centroid, cnt)) in result.centroid_points().iter().zip(result.centroid_frequency.iter()).enumerate() {
        println!("Cluster {}: {:.3?} ({} points)", ci, centroid, cnt);
    }
    println!("Converged: {} after {} iterations", result.converged(), result.iterations);
    println!("Error: {:.4}", result.distsum);
    Ok(())
}
