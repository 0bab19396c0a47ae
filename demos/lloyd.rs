use kcluster::*;

fn main() -> Result<(), KMeansError> {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 2, 4, 100);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

    // Calculate kmeans, using kmean++ as initialization-method (10 restarts, best one wins)
    let kmean = KMeans::new(samples, sample_cnt, sample_dims)?;
    let result = kmean.cluster(k, &InitMethod::Default(DefaultInit::KMeansPlusPlus), max_iter, &KMeansConfig::default())?;

    println!("Centroids: {:?}", result.centroid_points());
    println!("Cluster-Sizes: {:?}", result.centroid_frequency);
    println!("Iterations: {} ({:?})", result.iterations, result.termination);
    println!("Error: {}", result.distsum);
    Ok(())
}
