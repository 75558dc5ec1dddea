use sst_core::ResourceId;
use sst_core::enums::PgrStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Move a PGR to `next`, refusing transitions the lifecycle does not allow
/// before anything is sent.
pub async fn run(
    id: &ResourceId,
    next: PgrStatus,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let current = with_spinner("Carregando PGR...", ctx.client.get_pgr(id)).await?;
    check_transition(current.status, next)?;

    let updated = with_spinner(
        "Atualizando status...",
        ctx.client.update_pgr_status(id, next),
    )
    .await?;
    tracing::info!(%id, from = %current.status, to = %updated.status, "PGR status changed");
    output(&updated, flags.format)
}

fn check_transition(current: PgrStatus, next: PgrStatus) -> anyhow::Result<()> {
    if current.can_transition_to(next) {
        return Ok(());
    }
    let allowed = current.allowed_next_states();
    if allowed.is_empty() {
        anyhow::bail!("PGR is {current} and cannot change status anymore");
    }
    let allowed = allowed
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    anyhow::bail!("PGR cannot go from {current} to {next}; allowed: {allowed}")
}

#[cfg(test)]
mod tests {
    use sst_core::enums::PgrStatus;

    use super::check_transition;

    #[test]
    fn draft_can_go_live() {
        assert!(check_transition(PgrStatus::Rascunho, PgrStatus::Vigente).is_ok());
    }

    #[test]
    fn expired_cannot_go_back_to_live() {
        let error = check_transition(PgrStatus::Vencido, PgrStatus::Vigente).expect_err("refused");
        assert_eq!(
            error.to_string(),
            "PGR cannot go from VENCIDO to VIGENTE; allowed: ARQUIVADO"
        );
    }

    #[test]
    fn archived_is_terminal() {
        let error =
            check_transition(PgrStatus::Arquivado, PgrStatus::Rascunho).expect_err("refused");
        assert!(error.to_string().contains("cannot change status anymore"));
    }
}
