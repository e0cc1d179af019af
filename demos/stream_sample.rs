//! Two small reservoirs: one still filling, one far past capacity.
//!
//! The second sample is seed-dependent by construction; the stable properties
//! are its size and that every element came from the stream.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use taru::Reservoir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Capacity 5, three adds: still filling, so the sample is exact.
    let mut errors = Reservoir::new(5)?;
    errors.add("first".to_string());
    errors.add("second".to_string());
    errors.add("third".to_string());

    let mut seen = vec![String::new(); errors.cap()];
    let n = errors.sample_into(&mut seen)?;
    println!("error sample ({n} of {} slots): {:?}", errors.cap(), &seen[..n]);

    // Capacity 3, ten thousand adds: every item survived with probability
    // 3/10_000. A fixed seed makes the run reproducible.
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    let mut ints = Reservoir::new(3)?;
    for i in 0..10_000 {
        ints.add_with_rng(i, &mut rng);
    }

    let mut sample = vec![0; ints.cap()];
    let n = ints.sample_into(&mut sample)?;
    assert_eq!(n, 3);
    assert!(sample.iter().all(|&v| (0..10_000).contains(&v)));
    println!("int sample after {} adds: {:?}", ints.seen(), &sample[..n]);

    Ok(())
}
