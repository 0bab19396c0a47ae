use kcluster::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KMeansError> {
    // RUST_LOG=kcluster=debug shows every iteration
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (sample_cnt, sample_dims, k, max_iter) = (20000, 8, 6, 2500);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

    let conf = KMeansConfig::<f64>::build()
        .init_done(&|_| println!("Initialization completed."))
        .iteration_done(&|s, nr, new_distsum|
            println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
                nr, s.distsum, new_distsum, s.distsum - new_distsum))
        .n_init(3)
        .build();

    // Calculate kmeans, using random samples as initialization-method
    let kmean = KMeans::new(samples, sample_cnt, sample_dims)?;
    let result = kmean.cluster(k, &InitMethod::Default(DefaultInit::RandomSample), max_iter, &conf)?;

    println!("Centroids: {:?}", result.centroid_points());
    println!("Error: {}", result.distsum);
    Ok(())
}
