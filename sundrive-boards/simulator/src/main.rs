mod assets;
mod config;
mod drivers;

use std::io::BufRead;

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};
use jiff::Zoned;
use static_cell::StaticCell;
use sundrive_common::*;
use sundrive_core::protocol::decode_inbound;
use sundrive_core::render::Framebuffer;
use sundrive_core::{WatchFace, face_main};

use config::SimulatorConfig;
use drivers::*;

pub struct Simulator;

impl Platform for Simulator {
    type Storage = FileBlobStorage;
    type Battery = SimulatedBattery;
    type Steps = SimulatedSteps;
    type Clock = SystemClock;
    type Outbox = StdoutOutbox;
    type Services = SimulatorServices;
}

type SimSender = FaceEventSender<'static, CriticalSectionRawMutex>;

static EVENTS: StaticCell<FaceChannel<CriticalSectionRawMutex>> = StaticCell::new();
static GATES: ServiceGates = ServiceGates::new();

const HEALTH_INTERVAL: Duration = Duration::from_secs(30);
const GATE_POLL: std::time::Duration = std::time::Duration::from_millis(50);

/// 每到整分钟发送一次 tick，跨天时附带 Day
#[embassy_executor::task]
async fn minute_ticker(sender: SimSender, gates: &'static ServiceGates) {
    let mut last_date = Zoned::now().date();
    loop {
        let now = Zoned::now();
        let wait = 60 - now.second() as u64;
        Timer::after(Duration::from_secs(wait)).await;

        let today = Zoned::now().date();
        let units = if today != last_date {
            last_date = today;
            TimeUnit::Minute | TimeUnit::Day
        } else {
            TimeUnit::Minute.into()
        };
        if gates.is_open(Service::TickTimer(units)) {
            sender.send(FaceEvent::Tick(units)).await;
        }
    }
}

#[embassy_executor::task]
async fn health_ticker(sender: SimSender, gates: &'static ServiceGates) {
    loop {
        Timer::after(HEALTH_INTERVAL).await;
        if gates.is_open(Service::Health) {
            sender
                .send(FaceEvent::Health(HealthEvent::MovementUpdate))
                .await;
        }
    }
}

/// 标准输入每行一个 JSON 对象，"quit" 或输入结束时退出
fn spawn_stdin_reader(sender: SimSender, gates: &'static ServiceGates) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" {
                break;
            }
            // 表盘订阅消息服务之前先不投递
            while !gates.is_open(Service::AppMessage) {
                std::thread::sleep(GATE_POLL);
            }
            let event = match decode_inbound(line.as_bytes()) {
                Ok(message) => MessageEvent::Received(message),
                Err(e) => {
                    warn!("Malformed message {:?}: {:?}", line, e);
                    MessageEvent::Dropped(TransportError::Malformed)
                }
            };
            futures_executor::block_on(sender.send(FaceEvent::Message(event)));
        }
        futures_executor::block_on(sender.send(FaceEvent::Exit));
    });
}

fn spawn_tasks(spawner: &Spawner, sender: SimSender, gates: &'static ServiceGates) {
    if let Err(e) = spawner.spawn(minute_ticker(sender, gates)) {
        error!("Failed to spawn minute ticker: {:?}", e);
    }
    if let Err(e) = spawner.spawn(health_ticker(sender, gates)) {
        error!("Failed to spawn health ticker: {:?}", e);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimulatorConfig::from_env();
    info!("Simulator config: {:?}", config);

    let storage = match FileBlobStorage::new(&config.storage_dir) {
        Ok(storage) => storage,
        Err(e) => {
            error!("Storage unavailable: {:?}", e);
            std::process::exit(1);
        }
    };

    let channel: &'static FaceChannel<CriticalSectionRawMutex> = EVENTS.init(FaceChannel::new());
    let sender = channel.sender();

    let steps = if config.health_available {
        SimulatedSteps::new(3200, 90)
    } else {
        SimulatedSteps::unavailable()
    };
    let (capabilities, display_size) = config.display();

    let ctx = PlatformContext::<Simulator> {
        storage,
        battery: SimulatedBattery::new(85),
        steps,
        clock: SystemClock::new(),
        outbox: StdoutOutbox::new(sender),
        services: SimulatorServices::new(config.health_available, &GATES),
        capabilities,
        display_size,
    };
    let mut face = WatchFace::new(ctx, assets::icons());

    spawn_tasks(&spawner, sender, &GATES);
    spawn_stdin_reader(sender, &GATES);

    let mut framebuffer = Framebuffer::new(display_size.width, display_size.height);
    let frame_path = config.frame_path.clone();
    let result = face_main(&mut face, channel.receiver(), &mut framebuffer, |fb| {
        match std::fs::write(&frame_path, fb.to_ppm()) {
            Ok(()) => debug!("Frame written to {}", frame_path.display()),
            Err(e) => error!("Failed to write frame: {}", e),
        }
    })
    .await;

    if let Err(e) = result {
        error!("Face main error: {:?}", e);
        std::process::exit(1);
    }
    info!("Simulator exiting");
    std::process::exit(0);
}
