//! Subrosa CLI: operational tooling for the façade
//!
//! Usage:
//!   subrosa [--alg <ALG>] keygen [--count <N>]
//!   subrosa [--alg <ALG>] keypair
//!   subrosa [--alg <ALG>] salt
//!   subrosa [--alg <ALG>] derive --private <HEX> --public <HEX> --salt <HEX>
//!   subrosa [--alg <ALG>] encrypt [--key <HEX>] --text <TEXT>
//!   subrosa [--alg <ALG>] decrypt --key <HEX> --data <HEX>
//!
//! All binary values are hex on the command line and on stdout.

use std::process::ExitCode;

use subrosa::{
    Algorithm, Confidential, DecryptionRequest, EncryptionRequest, SharedSecret, ALGORITHM_ENV,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (algorithm, rest) = match split_algorithm(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(command) = rest.first() else {
        print_usage();
        return ExitCode::from(1);
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let confidential = Confidential::new(algorithm);
    let flags = &rest[1..];

    let result = runtime.block_on(async {
        match command.as_str() {
            "keygen" => cmd_keygen(&confidential, flags).await,
            "keypair" => cmd_keypair(&confidential).await,
            "salt" => cmd_salt(&confidential).await,
            "derive" => cmd_derive(&confidential, flags).await,
            "encrypt" => cmd_encrypt(&confidential, flags).await,
            "decrypt" => cmd_decrypt(&confidential, flags).await,
            "--help" | "-h" => {
                print_usage();
                Ok(())
            }
            "--version" | "-V" => {
                println!("subrosa {}", subrosa::VERSION);
                Ok(())
            }
            cmd => {
                eprintln!("error: unknown command '{}'", cmd);
                print_usage();
                Err("unknown command".into())
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` filters; `SUBROSA_LOG_JSON=1` switches to JSON lines on stderr.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if std::env::var("SUBROSA_LOG_JSON").as_deref() == Ok("1") {
        builder.json().with_target(true).init();
    } else {
        builder.init();
    }
}

fn print_usage() {
    eprintln!(
        r#"Subrosa CLI: AES-GCM, X25519 agreement and SHA-2

USAGE:
    subrosa [--alg <ALG>] <COMMAND> [OPTIONS]

ALGORITHMS (--alg, or ${env}; default aes-256):
    aes-128 | aes-192 | aes-256
    x25519-sha{{256,384,512}}-aes{{128,192,256}}
    sha-256 | sha-384 | sha-512

COMMANDS:
    keygen      Generate wrapped key(s)            [--count N]
    keypair     Generate an agreement key pair
    salt        Generate a derivation salt
    derive      Derive a wrapped key               --private HEX --public HEX --salt HEX
    encrypt     Encrypt or hash text               [--key HEX] --text TEXT
    decrypt     Decrypt hex data                   --key HEX --data HEX

EXAMPLES:
    subrosa keygen
    subrosa encrypt --key $KEY --text "Hello, world!"
    subrosa --alg sha-512 encrypt --text "abc"

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version
"#,
        env = ALGORITHM_ENV
    );
}

fn split_algorithm(args: &[String]) -> Result<(Algorithm, &[String]), Box<dyn std::error::Error>> {
    match args.first().map(String::as_str) {
        Some("--alg") => {
            let name = args.get(1).ok_or("missing algorithm name")?;
            Ok((name.parse::<Algorithm>()?, &args[2..]))
        }
        _ => Ok((Algorithm::from_env()?, args)),
    }
}

fn flag<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>, Box<dyn std::error::Error>> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == name {
            let value = args.get(i + 1).ok_or_else(|| format!("missing value for {}", name))?;
            return Ok(Some(value.as_str()));
        }
        if !args[i].starts_with("--") {
            return Err(format!("unexpected argument: {}", args[i]).into());
        }
        i += 2;
    }
    Ok(None)
}

fn required<'a>(args: &'a [String], name: &str) -> Result<&'a str, Box<dyn std::error::Error>> {
    flag(args, name)?.ok_or_else(|| format!("missing {}", name).into())
}

fn hex_flag(args: &[String], name: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    hex::decode(required(args, name)?).map_err(|e| format!("{}: {}", name, e).into())
}

async fn cmd_keygen(confidential: &Confidential, args: &[String]) -> CliResult {
    let count: usize = match flag(args, "--count")? {
        Some(n) => n.parse()?,
        None => 1,
    };

    let keys = if count == 1 {
        confidential.generate_key(None).await.map(|k| vec![k])
    } else {
        confidential.generate_keys(count, None).await
    };

    for key in keys.ok_or("key generation failed (not supported by this algorithm?)")? {
        println!("{}", hex::encode(key));
    }
    Ok(())
}

async fn cmd_keypair(confidential: &Confidential) -> CliResult {
    let pair = confidential
        .generate_key_pair()
        .await
        .ok_or("key pair generation not supported by this algorithm")?;
    println!("private {}", hex::encode(&pair.private_key));
    if let Some(public) = &pair.public_key {
        println!("public  {}", hex::encode(public));
    }
    Ok(())
}

async fn cmd_salt(confidential: &Confidential) -> CliResult {
    let salt = confidential
        .generate_salt()
        .await
        .ok_or("salt generation not supported by this algorithm")?;
    println!("{}", hex::encode(salt));
    Ok(())
}

async fn cmd_derive(confidential: &Confidential, args: &[String]) -> CliResult {
    let private = hex_flag(args, "--private")?;
    let public = hex_flag(args, "--public")?;
    let salt = hex_flag(args, "--salt")?;

    let key = confidential
        .generate_key(Some(&SharedSecret::for_peer(&private, &public, &salt)))
        .await
        .ok_or("derivation failed")?;
    println!("{}", hex::encode(key));
    Ok(())
}

async fn cmd_encrypt(confidential: &Confidential, args: &[String]) -> CliResult {
    let text = required(args, "--text")?;
    let key = match flag(args, "--key")? {
        Some(k) => Some(hex::decode(k).map_err(|e| format!("--key: {}", e))?),
        None => None,
    };

    let output = confidential
        .encrypt(&EncryptionRequest::new(text, key))
        .await
        .ok_or("encryption failed")?;
    println!("{}", hex::encode(output));
    Ok(())
}

async fn cmd_decrypt(confidential: &Confidential, args: &[String]) -> CliResult {
    let key = hex_flag(args, "--key")?;
    let data = hex_flag(args, "--data")?;

    let text = confidential
        .decrypt(&DecryptionRequest::with_key(data, key))
        .await
        .ok_or("decryption failed")?;
    println!("{}", text);
    Ok(())
}
