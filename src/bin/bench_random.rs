use lifelike::*;

const SEED: u64 = 42;
const FIELD_SIZE: u32 = 512;
const GENERATIONS: u64 = 1_000;

fn run<K: KeyScheme>(config: &Config) -> Simulation<K> {
    let timer = std::time::Instant::now();
    let mut sim = Simulation::<K>::from_config(config).unwrap();
    println!("[{}] Time on building field: {:?}", K::NAME, timer.elapsed());

    let timer = std::time::Instant::now();
    for _ in 0..GENERATIONS {
        sim.tick();
    }
    println!(
        "[{}] Time on {} generations: {:?}",
        K::NAME,
        GENERATIONS,
        timer.elapsed()
    );
    println!("{}", sim.statistics());
    sim
}

fn main() {
    let config = Config {
        field_size: FIELD_SIZE,
        ..Config::default().with_seed(SEED)
    };
    let paired = run::<PairedKey>(&config);
    let plain = run::<CellKey>(&config);
    assert_eq!(paired.grid().population(), plain.grid().population());
    assert_eq!(paired.grid().bounds(), plain.grid().bounds());
}
