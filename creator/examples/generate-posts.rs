use dotenvy::dotenv;
use socialsync_creator::{clipboard_text, save_image, Orchestrator, SAMPLE_IDEAS};
use socialsync_sdk::{
    google::{GoogleGenerator, GoogleGeneratorOptions},
    Tone,
};
use std::{env, path::Path, sync::Arc};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
    let generator = Arc::new(GoogleGenerator::new(GoogleGeneratorOptions {
        api_key,
        ..Default::default()
    }));

    let idea = env::args().nth(1).unwrap_or_else(|| SAMPLE_IDEAS[0].to_string());
    let tone = env::args().nth(2).map_or(Tone::Professional, |arg| {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(&arg))
            .unwrap_or_else(|| panic!("unknown tone '{arg}', expected one of {:?}", Tone::ALL))
    });
    println!("Generating posts for: {idea} ({tone} tone)\n");

    let orchestrator = Orchestrator::new(generator);
    orchestrator.run(&idea, tone).await.expect("run rejected");

    for result in orchestrator.store().snapshot() {
        println!("=== {} ===", result.platform);
        match clipboard_text(&result) {
            Some(text) => println!("{text}\n"),
            None => println!("(no text)\n"),
        }
        if let Some(prompt) = &result.image_prompt {
            println!("Visual prompt: {prompt}");
        }
        match save_image(&result, Path::new("."), "socialsync") {
            Ok(path) => println!("Saved image to {}", path.display()),
            Err(error) => println!("No image: {error}"),
        }
        if let Some(error) = &result.error {
            println!("Error: {error}");
        }
        println!();
    }
}
