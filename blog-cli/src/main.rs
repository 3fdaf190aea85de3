use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use blog_client::{BlogClient, BlogClientError, Post};
use clap::{Parser, Subcommand};

const TOKEN_FILE: &str = ".blog_token";
const DEFAULT_HTTP_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI клиент для blog-server")]
struct Cli {
    /// Адрес HTTP-сервера.
    #[arg(long, global = true)]
    server: Option<String>,

    /// JWT-токен автора; по умолчанию берётся из BLOG_TOKEN или .blog_token.
    #[arg(long, global = true, env = "BLOG_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Сохраняет токен в .blog_token для последующих команд.
    UseToken {
        #[arg(value_name = "TOKEN")]
        raw_token: String,
    },
    /// Создание поста.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Получение поста по id.
    Get {
        #[arg(long)]
        id: String,
    },
    /// Обновление поста.
    ///
    /// Незаданные `--title`/`--content` остаются прежними.
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Список всех постов.
    List,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Command::UseToken { raw_token } = &cli.command {
        let token = parse_token_content(raw_token).context("токен не должен быть пустым")?;
        fs::write(TOKEN_FILE, token).context("не удалось сохранить токен")?;
        println!("Токен сохранён в {TOKEN_FILE}");
        return Ok(());
    }

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string()));
    let mut client = BlogClient::new(server).map_err(map_client_error)?;

    let token = match cli.token.as_deref().and_then(parse_token_content) {
        Some(token) => Some(token),
        None => load_token().context("не удалось прочитать .blog_token")?,
    };
    if let Some(token) = token {
        client.set_token(token);
    }

    match cli.command {
        Command::UseToken { .. } => {}
        Command::Create { title, content } => {
            let id = client
                .create_post(&title, &content)
                .await
                .map_err(map_client_error)?;
            println!("Пост создан: id={id}");
        }
        Command::Get { id } => match client.get_post(&id).await.map_err(map_client_error)? {
            Some(post) => print_post("Пост", &post),
            None => println!("Пост не найден: id={id}"),
        },
        Command::Update { id, title, content } => {
            let id = client
                .update_post(&id, title.as_deref(), content.as_deref())
                .await
                .map_err(map_client_error)?;
            println!("Пост обновлён: id={id}");
        }
        Command::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_list(&posts);
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::Unauthorized => {
            "требуется токен: передайте --token, BLOG_TOKEN или выполните `blog-cli use-token ...`"
                .to_string()
        }
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BlogClientError::Server(message) => format!("ошибка сервера: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn author_label(post: &Post) -> &str {
    post.author.name.as_deref().unwrap_or("<без имени>")
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("content: {}", post.content);
    println!("author: {}", author_label(post));
}

fn print_list(posts: &[Post]) {
    println!("Постов: {}", posts.len());

    for post in posts {
        println!("- [{}] {} (author={})", post.id, post.title, author_label(post));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_client::Author;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8080".to_string());
        assert_eq!(s, "http://127.0.0.1:8080");
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  abc.def.ghi  ");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        let token = parse_token_content("   ");
        assert!(token.is_none());
    }

    #[test]
    fn author_label_falls_back_for_missing_name() {
        let post = Post {
            id: "p1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            author: Author { name: None },
        };
        assert_eq!(author_label(&post), "<без имени>");
    }

    #[test]
    fn update_accepts_partial_fields() {
        let cli = Cli::try_parse_from(["blog-cli", "update", "--id", "p1", "--title", "new"])
            .expect("must parse");
        match cli.command {
            Command::Update { id, title, content } => {
                assert_eq!(id, "p1");
                assert_eq!(title.as_deref(), Some("new"));
                assert!(content.is_none());
            }
            other => panic!("expected update, got {other:?}"),
        }
    }
}
