use cheat::gameroom::Room;
use cheat::players::Handle;
use cheat::players::Robot;
use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;

/// Run a table of robots, optionally with one human on stdin/stdout.
///
/// The human receives one JSON view per line and answers with JSON frames,
/// `{"discard": ["H1", "S1"]}` or `{"callout": true}`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of robot seats
    #[arg(short, long, default_value_t = 3)]
    robots: usize,
    /// Seat a human under this name
    #[arg(long)]
    human: Option<String>,
    /// Seed for the shuffle and the robots
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Stop after this many actions instead of playing forever
    #[arg(short = 'n', long)]
    steps: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cheat::log()?;
    let args = Args::parse();
    let mut room = Room::new(args.seed);
    if let Some(name) = args.human {
        let (handle, client) = Handle::pair();
        room.sit(name, client)?;
        tokio::spawn(bridge(handle));
    }
    for i in 0..args.robots {
        let seed = args.seed.wrapping_add(i as u64 + 1);
        room.sit(format!("robot-{}", i), Robot::new(seed))?;
    }
    room.start().await?;
    let Some(n) = args.steps else {
        match room.run().await? {}
    };
    for _ in 0..n {
        room.step().await?;
    }
    log::info!("stopping after {} actions", room.game().history().len());
    println!("{}", room.game());
    Ok(())
}

/// Shuttles lines between stdin/stdout and a Client seat.
async fn bridge(handle: Handle) {
    let Handle { tx, mut rx } = handle;
    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        tokio::select! {
            Some(view) = rx.recv() => {
                let line = format!("{}\n", view);
                if let Err(e) = stdout.write_all(line.as_bytes()).await {
                    log::warn!("[bridge] stdout closed: {}", e);
                    break;
                }
                if let Err(e) = stdout.flush().await {
                    log::warn!("[bridge] stdout flush failed: {}", e);
                }
            }
            Ok(Some(frame)) = stdin.next_line() => {
                if tx.send(frame).is_err() {
                    break;
                }
            }
            else => break,
        }
    }
}
