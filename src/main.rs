use anyhow::Context;
use deerfm::app::App;
use deerfm::config::Config;
use deerfm::core::commands::parse_line;
use deerfm::ipc::{bridge, Event};
use deerfm::shell;
use deerfm::system::{FavoritesStore, FsService};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading config")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let (ui, port) = bridge();
    let service = FsService::new(FavoritesStore::new(config.favorites_path()));
    let service_task = tokio::spawn(service.run(port));

    let mut app = App::new(&config, ui.requests);
    let mut events = ui.events;
    app.start(config.start_path.clone());
    print_lines(shell::render_active(&app));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !app.should_quit() {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(Some(command)) => print_lines(shell::execute(&mut app, command)),
                    Ok(None) => {}
                    Err(err) => println!("{}", err),
                }
            }
            event = events.recv() => {
                let Some(event) = event else {
                    log::error!("filesystem service stopped");
                    break;
                };
                let redraw = matches!(
                    event,
                    Event::DirectoryOpened { .. } | Event::DrivesListed(_) | Event::FavoritesListed(_)
                );
                app.handle_event(event);
                if redraw {
                    print_lines(shell::render_active(&app));
                }
                if let Some(toast) = app.take_toast() {
                    println!("! {}", toast);
                }
            }
        }
    }

    // 요청 송신부가 사라지면 서비스 루프가 끝난다
    drop(app);
    service_task.await.context("joining filesystem service")?;
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
