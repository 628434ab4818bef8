use egress::{nearest_exit, shortest_route, EgressConfig, RouteOutcome, Scenario};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Egress exit routing v{}", egress::version());
    println!("==========================================");
    println!();

    let config = EgressConfig::default();

    // Demo 1: open floor plan
    demo_route(&Scenario::floor_plan(), &config, "Demo 1: Floor plan, D to exit S")?;

    // Demo 2: corridor D-I blocked
    let mut blocked = Scenario::floor_plan();
    blocked.restrict("D", "I");
    demo_route(&blocked, &config, "Demo 2: Corridor D-I blocked")?;

    // Demo 3: nearest exit from F
    demo_nearest(&Scenario::floor_plan(), &config, "F")?;

    Ok(())
}

fn demo_route(scenario: &Scenario, config: &EgressConfig, title: &str) -> anyhow::Result<()> {
    println!("=== {} ===", title);
    let store = scenario.build(&scenario.fit(&config.graph))?;
    let query = scenario.query_config(&config.query);

    let from = store.resolve("D")?;
    let to = store.resolve("S")?;
    print_outcome(&shortest_route(&store, from, to, &query)?);

    println!("\nAdjacency matrix:");
    print!("{}", store.adjacency_table());
    println!();
    Ok(())
}

fn demo_nearest(scenario: &Scenario, config: &EgressConfig, from: &str) -> anyhow::Result<()> {
    println!("=== Demo 3: Nearest exit from {} ===", from);
    let store = scenario.build(&scenario.fit(&config.graph))?;
    let query = scenario.query_config(&config.query);

    let source = store.resolve(from)?;
    let group = scenario
        .exits
        .first()
        .ok_or_else(|| anyhow::anyhow!("scenario has no exit group"))?;
    let exits = egress::algo::resolve_group(&store, group)?;
    print_outcome(&nearest_exit(&store, source, &exits, &query)?);
    Ok(())
}

fn print_outcome(outcome: &RouteOutcome) {
    match outcome {
        RouteOutcome::Found(route) => {
            println!("✓ Shortest distance: {}", route.distance);
            println!("✓ Shortest Path: {}", route.label);
        }
        RouteOutcome::Unreachable { .. } => println!("✗ No route to an exit"),
    }
}
