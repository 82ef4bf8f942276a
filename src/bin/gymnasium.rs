use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    process::Command,
    time::Duration,
};

use battlesnake_wallflower::config::Config;
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use reqwest::Url;

enum GameMode {
    Solo,
}

impl GameMode {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
        }
    }
}

struct PlayOptions {
    board_width:  u64,
    board_height: u64,
    mode:         GameMode,
}

struct Snake {
    name: String,
    url:  Url,
}

fn make_play_command(play_options: &PlayOptions, snakes: &[Snake]) -> Command {
    let mut cmd = Command::new("battlesnake");
    cmd.arg("play");

    cmd.arg("--width");
    cmd.arg(play_options.board_width.to_string());
    cmd.arg("--height");
    cmd.arg(play_options.board_height.to_string());

    for snake in snakes {
        cmd.arg("--name");
        cmd.arg(&snake.name);

        cmd.arg("--url");
        cmd.arg(snake.url.as_str());
    }

    cmd.arg("--gametype");
    cmd.arg(play_options.mode.as_str());

    cmd.arg("--browser");

    cmd
}

/// Make sure the snake server is actually listening before handing its url
/// to the engine, which otherwise just reports every move as timed out.
fn check_alive(url: &Url) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let resp = client
        .get(url.clone())
        .send()
        .wrap_err_with(|| format!("is the snake running at {url}?"))?;

    if !resp.status().is_success() {
        bail!("{url} answered with {}", resp.status());
    }

    println!("{url} says: {}", resp.text()?);
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_env()?;
    // the server may bind every interface but the engine needs somewhere
    // concrete to call.
    let host: IpAddr = if config.host.is_unspecified() {
        Ipv4Addr::LOCALHOST.into()
    } else {
        config.host
    };
    let url: Url =
        format!("http://{}", SocketAddr::new(host, config.port)).parse()?;

    check_alive(&url)?;

    let snakes = [Snake {
        name: "🌼 wallflower".to_owned(),
        url,
    }];

    let mut play = make_play_command(
        &PlayOptions {
            board_width:  11,
            board_height: 11,
            mode:         GameMode::Solo,
        },
        &snakes,
    );

    play.status()?;

    Ok(())
}
