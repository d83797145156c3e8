use crate::cli::Commands;
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use taskboard_domain::TaskId;

pub fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add { title, desc } => match ctx.add(&title, &desc) {
            Ok(task) => output::output_success(&task),
            Err(e) if e.is_validation() => output::output_error(&e.to_string()),
            Err(e) => Err(e.into()),
        },
        Commands::List { lane: None } => output::output_success(ctx.view()),
        Commands::List { lane: Some(lane) } => output::output_success(json!({
            "lane": lane,
            "tasks": ctx.store.get_lane(lane),
            "count": ctx.store.get_lane(lane).len(),
        })),
        Commands::Move { id, lane } => {
            let id = TaskId::new(id);
            let moved = ctx.move_to(&id, lane)?;
            output::output_success(json!({ "id": id, "lane": lane, "moved": moved }))
        }
        Commands::Delete { id } => {
            let id = TaskId::new(id);
            let deleted = ctx.delete(&id)?;
            output::output_success(json!({ "id": id, "deleted": deleted }))
        }
        Commands::Completions { .. } => Ok(()),
    }
}
