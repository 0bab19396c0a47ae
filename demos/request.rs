use kcluster::*;
use rand::prelude::*;

fn main() -> Result<(), serde_json::Error> {
    let mut rnd = StdRng::seed_from_u64(7);
    let data: Vec<Vec<f64>> = (0..100).map(|_| vec![rnd.gen_range(0.0, 1.0), rnd.gen_range(0.0, 1.0)]).collect();

    let requests = [
        serde_json::json!({ "data": data, "init_method": "k-means++", "n_clusters": 3 }),
        serde_json::json!({ "data": data, "init_method": "farthest", "n_clusters": 3 }),
        serde_json::json!({ "data": data, "init_method": "manual", "n_clusters": 3, "centroids": [0.5, 0.5] }),
        serde_json::json!({ "data": data, "init_method": "manual", "n_clusters": 3 }),
        serde_json::json!({ "data": [], "init_method": "random", "n_clusters": 3 }),
    ];

    for body in requests.iter() {
        let request: ClusterRequest<f64> = serde_json::from_value(body.clone())?;
        let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).build();
        let answer = match request.run(300, &conf) {
            Ok(response) => serde_json::to_string(&response)?,
            Err(err) => serde_json::to_string(&err.report())?
        };
        println!("{} -> {}", request.init_method, answer);
    }
    Ok(())
}
