//! Dispatch for the prove API: request in, response out (spec §6). Pure
//! function over the request/response types — no transport lives here.

use crate::engine::{self, ProveOptions};
use crate::logics;
use crate::parser::{self, Notation};
use crate::predicates::{Argument, PredicateStore};
use crate::tableau::Model;
use crate::writer::{self, Charset, RenderSet};

use super::error::ServiceError;
use super::tree;
use super::types::{
    ArgumentRequest, ModelView, OutputFormat, ProveRequest, ProveResponse, ProveResult, Stats, WorldView,
    WriterOutput,
};

pub fn prove(request: ProveRequest) -> Result<ProveResponse, ServiceError> {
    let logic = logics::lookup(&request.logic).ok_or_else(|| ServiceError::UnknownLogic(request.logic.clone()))?;

    let notation = parse_notation(&request.argument.notation, "argument.notation")?;
    let argument = build_argument(&request.argument, notation)?;

    let opts = ProveOptions {
        max_steps: request.max_steps,
        timeout: None,
        is_rank_optim: request.rank_optimizations,
        is_group_optim: request.group_optimizations,
        build_models: request.build_models,
        auto_build_trunk: true,
    };

    let tableau = engine::build(logic, argument, &opts)?;

    let output_notation = parse_notation(&request.output.notation, "output.notation")?;
    let charset = match request.output.format {
        OutputFormat::Text => Charset::Unicode,
        OutputFormat::Html => Charset::Html,
        OutputFormat::Latex => Charset::Latex,
    };
    let render_set = RenderSet::new(output_notation, charset);

    let stats = Stats {
        steps: tableau.step(),
        branches: tableau.branches().len(),
        open_branches: tableau.open_branches().count(),
        closed_branches: tableau.closed_branches().count(),
        nodes: tableau.node_count(),
    };
    let tree = tree::build(&tableau, render_set);
    let models = request.build_models.then(|| tableau.models.iter().map(|m| model_view(m, render_set)).collect());
    let rendered = render_argument(tableau.argument(), render_set);

    Ok(ProveResponse {
        result: ProveResult {
            valid: tableau.valid,
            completed: tableau.completed,
            premature: tableau.premature,
            stats,
            tree,
            models,
        },
        writer: WriterOutput { format: request.output.format, notation: request.output.notation, output: rendered },
    })
}

fn parse_notation(raw: &str, field: &'static str) -> Result<Notation, ServiceError> {
    raw.parse().map_err(|source| ServiceError::Parse { field, source })
}

fn build_argument(request: &ArgumentRequest, notation: Notation) -> Result<Argument, ServiceError> {
    let mut store = PredicateStore::new();
    for &(index, subscript, arity) in &request.predicates {
        store.declare(index, subscript, arity)?;
    }

    let conclusion = parser::parse(&request.conclusion, notation, &store)
        .map_err(|source| ServiceError::Parse { field: "argument.conclusion", source })?;

    let mut premises = Vec::with_capacity(request.premises.len());
    for premise in &request.premises {
        let sentence = parser::parse(premise, notation, &store)
            .map_err(|source| ServiceError::Parse { field: "argument.premises", source })?;
        premises.push(sentence);
    }

    Ok(Argument::new(conclusion, premises))
}

/// Render an argument as `premise1, premise2 ⊢ conclusion` (plain turnstile
/// for text, the charset's own markup otherwise).
fn render_argument(argument: &Argument, render_set: RenderSet) -> String {
    let turnstile = match render_set.charset {
        Charset::Html => "&#8866;",
        Charset::Latex => r"\vdash",
        Charset::Ascii | Charset::Unicode => "⊢",
    };
    let premises: Vec<String> = argument.premises.iter().map(|s| writer::write(s, render_set)).collect();
    let conclusion = writer::write(&argument.conclusion, render_set);
    if premises.is_empty() {
        format!("{turnstile} {conclusion}")
    } else {
        format!("{} {turnstile} {conclusion}", premises.join(", "))
    }
}

fn model_view(model: &Model, render_set: RenderSet) -> ModelView {
    ModelView {
        worlds: model
            .worlds
            .iter()
            .map(|wm| WorldView {
                world: wm.world,
                values: wm.values.iter().map(|(s, v)| (writer::write(s, render_set), v.to_string())).collect(),
            })
            .collect(),
        access: model.access.iter().copied().collect(),
        is_countermodel: model.is_countermodel,
    }
}
