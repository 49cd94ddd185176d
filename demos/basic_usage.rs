// ============================================================================
// Basic Usage Example
// ============================================================================

use lexorank::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== LexoRank Example ===\n");

    let ranker = Ranker::default();

    // Seed an empty backlog and append a few items
    println!("Appending items...");
    let mut backlog: Vec<(String, LexoRank)> = Vec::new();
    let mut rank = ranker.middle(Bucket::Bucket0);
    for i in 0..5 {
        backlog.push((format!("issue-{}", i), rank.clone()));
        rank = ranker.next(&rank).unwrap();
    }

    // Insert at the head of the list
    println!("Inserting at the head...");
    let head = ranker.between(None, Some(&backlog[0].1)).unwrap();
    backlog.push(("urgent".to_string(), head));

    // Split the same gap repeatedly; keys lengthen once whole slots run out
    println!("Splitting one gap repeatedly...");
    let low = backlog[1].1.clone();
    let mut high = backlog[2].1.clone();
    for i in 0..20 {
        high = ranker.between(Some(&low), Some(&high)).unwrap();
        backlog.push((format!("wedged-{}", i), high.clone()));
    }

    // Stored strings sort the same way the ranks do
    backlog.sort_by(|a, b| a.1.to_string().cmp(&b.1.to_string()));
    println!("\nBacklog in storage order:");
    for (name, rank) in &backlog {
        println!("  {:<12} {}", name, rank);
    }

    // Rotate everything into the next bucket
    let rotated: Vec<LexoRank> = backlog
        .iter()
        .map(|(_, rank)| rank.with_bucket(rank.bucket().next()))
        .collect();
    println!("\nFirst key after rotation: {}", rotated[0]);

    // Other radices
    for config in [RankConfig::base10(), RankConfig::base64()] {
        let ranker = create_from_config(config).unwrap();
        let middle = ranker.middle(Bucket::Bucket0);
        println!(
            "radix {:>2}: middle {} next {}",
            config.base.radix(),
            middle,
            ranker.next(&middle).unwrap()
        );
    }
}
