use mongodb_topology::{
    diff_topology, wire_version::SUPPORTED_WIRE_VERSIONS, ReadPrefMode, Server, ServerAddress,
    ServerKind, Topology, TopologyKind,
};
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

fn main() -> anyhow::Result<()> {
    setup_tracing()?;

    let seed_list = std::env::var("MONGODB_SEEDS")
        .unwrap_or_else(|_| "db0.example.com,db1.example.com:27018".to_string());
    let seeds = seed_list
        .split(',')
        .map(ServerAddress::parse)
        .collect::<Result<Vec<_>, _>>()?;

    // First round: nothing has answered a heartbeat yet.
    let discovering = Topology::builder()
        .set_kind(TopologyKind::ReplicaSetNoPrimary)
        .set_set_name("rs0")
        .set_servers(
            seeds
                .iter()
                .map(|address| Server::new(address.clone(), ServerKind::Unknown))
                .collect(),
        )
        .build()?;

    // Second round: one seed answered as primary and reported a new secondary.
    let mut servers = vec![Server::new(seeds[0].clone(), ServerKind::ReplicaSetPrimary)
        .with_set_name("rs0")
        .with_wire_version(SUPPORTED_WIRE_VERSIONS)];
    servers.push(
        Server::new(ServerAddress::parse("db2.example.com")?, ServerKind::ReplicaSetSecondary)
            .with_set_name("rs0"),
    );
    let discovered = Topology::builder()
        .set_kind(TopologyKind::ReplicaSetWithPrimary)
        .set_set_name("rs0")
        .set_session_timeout_minutes(30)
        .set_servers(servers)
        .check_wire_versions(SUPPORTED_WIRE_VERSIONS)
        .build()?;

    tracing::info!("Previous: {}", discovering);
    tracing::info!("Current: {}", discovered);

    let diff = diff_topology(&discovering, &discovered);
    for server in &diff.added {
        tracing::info!("Start monitoring {}", server.address());
    }
    for server in &diff.removed {
        tracing::info!("Stop monitoring {}", server.address());
    }

    let srv_records = ["db0.example.com:27017", "db2.example.com:27017", "db3.example.com:27017"];
    let hosts = discovered.diff_hostlist(&srv_records);
    tracing::info!("Host list reconciliation: {}", serde_json::to_string(&hosts)?);

    discovered.ensure_compatible()?;
    for mode in ["primary", "secondary", "nearest"] {
        let mode = mode.parse::<ReadPrefMode>()?;
        tracing::info!(
            "{} read available before: {}, after: {}",
            mode,
            discovering.has_readable_server(&mode),
            discovered.has_readable_server(&mode)
        );
    }
    tracing::info!("Writable: {}", discovered.has_writable_server());
    tracing::info!("Snapshots equal: {}", discovering.equal(&discovered));

    Ok(())
}

fn setup_tracing() -> anyhow::Result<()> {
    // Redirect all `log`'s events to the subscriber
    LogTracer::init()?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_target(false));
    set_global_default(subscriber)?;
    Ok(())
}
