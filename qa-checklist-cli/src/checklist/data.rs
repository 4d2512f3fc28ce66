//! The workshop checklist table
//!
//! Hardcoded data, not logic: 19 blocks across four levels, each with its
//! badge and ordered verification steps. Block numbers are contiguous in
//! declaration order.

use super::{ChecklistBlock, Level};

/// Build the full workshop checklist, in declaration order.
pub fn workshop_checklist() -> Vec<ChecklistBlock> {
    vec![
        // Level 101
        ChecklistBlock::new(
            Level::L101,
            1,
            "Bronzener Sporn",
            "Local Dev Environment & First Messages",
            &[
                (
                    "Clone repo and inspect structure",
                    "git clone, ls, cat README.md",
                    "Repo cloned, structure matches RUNBOOK Section 3",
                ),
                (
                    "Start docker-compose (broker + SR)",
                    "cd docker && docker compose up -d broker schema-registry",
                    "Both containers in 'running' state",
                ),
                (
                    "Verify broker is ready",
                    "docker exec broker kafka-topics --bootstrap-server localhost:9092 --list",
                    "Command returns without error",
                ),
                (
                    "Create topics with script",
                    "./scripts/create-topics.sh local",
                    "All 3 topics created: payments, fraud-alerts, approved-payments",
                ),
                (
                    "Build the project with Maven",
                    "mvn clean package -DskipTests",
                    "BUILD SUCCESS for all modules",
                ),
                (
                    "Run the producer",
                    "java -Dapp.env=dev -jar producer-consumer-app/target/*.jar produce",
                    "Messages sent, txn_id and partition visible in logs",
                ),
                (
                    "Run the consumer",
                    "java -Dapp.env=dev -jar producer-consumer-app/target/*.jar consume",
                    "Messages received, offsets committed",
                ),
                (
                    "Inspect with kcat",
                    "kcat -b localhost:9092 -t payments -C -o beginning -c 5 -e",
                    "5 messages displayed with masked card numbers",
                ),
                (
                    "Verify PCI-DSS masking",
                    "Inspect kcat output",
                    "Card numbers show ****-****-****-XXXX only",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block1",
                    "All checks PASS, Bronzener Sporn earned",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L101,
            2,
            "Silberner Sporn",
            "Producer/Consumer Deep Dive & PCI-DSS",
            &[
                (
                    "Review PaymentProducer.java",
                    "Open in IDE, review acks, idempotence, masking",
                    "Understand acks=all, enable.idempotence=true, card masking logic",
                ),
                (
                    "Review PaymentConsumer.java",
                    "Open in IDE, review manual commit",
                    "Understand enable.auto.commit=false, commitSync() pattern",
                ),
                (
                    "Add country_code field to producer",
                    "Edit buildPaymentJson() per lab guide",
                    "New field appears in produced messages",
                ),
                (
                    "Add amount filter to consumer",
                    "Edit forEach loop per lab guide",
                    "Consumer only logs payments > 100.00",
                ),
                (
                    "Rebuild after modifications",
                    "mvn clean package -DskipTests",
                    "BUILD SUCCESS",
                ),
                (
                    "Verify modified producer output",
                    "kcat -b localhost:9092 -t payments -C -o -1 -c 1 -e",
                    "country_code field visible in JSON",
                ),
                (
                    "Run unit tests",
                    "mvn test -pl producer-consumer-app",
                    "All tests PASS",
                ),
                (
                    "Verify no unmasked card numbers",
                    "grep -r for card patterns in source",
                    "No full PAN in code or logs",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block2",
                    "All checks PASS, Silberner Sporn earned",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L101,
            3,
            "Goldener Sporn",
            "Kafka Streams — Fraud Detection",
            &[
                (
                    "Review FraudDetectionTopology.java",
                    "Open in IDE, trace the pipeline",
                    "Understand source → enrich → branch topology",
                ),
                (
                    "Review FraudDetectionTopologyTest.java",
                    "Open in IDE",
                    "Understand TopologyTestDriver pattern (no broker)",
                ),
                (
                    "Run existing tests (8 tests)",
                    "mvn test -pl kstreams-app",
                    "All 8 tests PASS",
                ),
                (
                    "Add velocity check rule",
                    "Edit computeRiskScore() per lab guide",
                    "New rule: amount>3000 + MERCH-004 → +0.35",
                ),
                (
                    "Write test for new rule",
                    "Add highValue_suspiciousMerchant_shouldBeFlagged()",
                    "New test asserts fraud alert for the scenario",
                ),
                (
                    "Run all tests (9 tests)",
                    "mvn test -pl kstreams-app",
                    "All 9 tests PASS",
                ),
                (
                    "Start KStreams app",
                    "java -Dapp.env=dev -jar kstreams-app/target/*.jar",
                    "Topology printed, app enters RUNNING state",
                ),
                (
                    "Verify fraud-alerts topic",
                    "kcat -b localhost:9092 -t fraud-alerts -C -o beginning -c 5 -e",
                    "Flagged transactions visible with risk_score > 0.7",
                ),
                (
                    "Verify approved-payments topic",
                    "kcat -b localhost:9092 -t approved-payments -C -o beginning -c 5 -e",
                    "Approved transactions visible with risk_score <= 0.7",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block3",
                    "All checks PASS, Goldener Sporn earned",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L101,
            4,
            "Eiserner Sporn",
            "Configuration & Git-Flow",
            &[
                (
                    "Test config: base classpath",
                    "java -Dapp.env=dev -jar *.jar produce (check log)",
                    "Log shows bootstrap.servers=localhost:9092",
                ),
                (
                    "Test config: env var override",
                    "export KAFKA_BOOTSTRAP_SERVERS=override:9092, run app",
                    "Log shows bootstrap.servers=override:9092",
                ),
                (
                    "Test config: external file",
                    "java -Dconfig.file=/tmp/test.properties -jar *.jar",
                    "Log shows value from external file",
                ),
                (
                    "Unset overrides",
                    "unset KAFKA_BOOTSTRAP_SERVERS",
                    "Clean state restored",
                ),
                (
                    "Compare dev vs prod config",
                    "diff application-dev.properties application-prod.properties",
                    "PROD has SASL_SSL, idempotence, read_committed",
                ),
                (
                    "Create feature branch",
                    "git checkout -b feature/workshop-changes",
                    "Branch created",
                ),
                (
                    "Commit changes from Blocks 2+3",
                    "git add ... && git commit",
                    "Commit created with descriptive message",
                ),
                (
                    "Verify git log",
                    "git log --oneline -5",
                    "New commit visible on feature branch",
                ),
                (
                    "Return to main branch",
                    "git checkout -",
                    "Back on original branch",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block4",
                    "All checks PASS, Eiserner Sporn earned",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L101,
            5,
            "Stahlerner Sporn",
            "Docker, Kubernetes & GitOps",
            &[
                (
                    "Build producer-consumer Docker image",
                    "docker build -f docker/Dockerfile.producer-consumer -t payment-app:workshop .",
                    "Image built successfully",
                ),
                (
                    "Build kstreams Docker image",
                    "docker build -f docker/Dockerfile.kstreams -t fraud-detection:workshop .",
                    "Image built successfully",
                ),
                (
                    "Verify images exist",
                    "docker images | grep -E 'payment-app|fraud-detection'",
                    "Both images listed with 'workshop' tag",
                ),
                (
                    "Verify non-root user in Dockerfile",
                    "grep USER docker/Dockerfile.*",
                    "Both Dockerfiles have USER appuser",
                ),
                (
                    "Render dev K8s overlay",
                    "kubectl kustomize k8s/overlays/dev/",
                    "Manifests rendered (1 replica, small resources)",
                ),
                (
                    "Render prod K8s overlay",
                    "kubectl kustomize k8s/overlays/prod/",
                    "Manifests rendered (4 replicas, large resources)",
                ),
                (
                    "Compare dev vs prod replicas",
                    "Visual comparison of kustomize output",
                    "DEV=1, PROD=4 replicas for fraud-detection",
                ),
                (
                    "Review CI pipeline",
                    "cat .github/workflows/ci.yaml",
                    "3 jobs: build, docker, security",
                ),
                (
                    "Review CD pipeline",
                    "cat .github/workflows/cd-gitops.yaml",
                    "QA auto-promote, PROD via PR",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block5",
                    "All checks PASS, Stahlerner Sporn earned",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L101,
            6,
            "Diamantener Sporn",
            "Troubleshooting & Diagnostics",
            &[
                (
                    "Run full diagnostics",
                    "./scripts/diagnose.sh full",
                    "All sections execute, output readable",
                ),
                (
                    "Scenario A: Stop broker",
                    "docker compose -f docker/docker-compose.yml stop broker",
                    "Broker stopped",
                ),
                (
                    "Scenario A: Diagnose failure",
                    "./scripts/diagnose.sh connectivity",
                    "[FAIL] displayed for broker",
                ),
                (
                    "Scenario A: Fix and verify",
                    "docker compose start broker && ./scripts/diagnose.sh connectivity",
                    "[PASS] Broker reachable",
                ),
                (
                    "Scenario B: Start producer only (no consumer)",
                    "Run producer, wait 30s",
                    "Messages piling up",
                ),
                (
                    "Scenario B: Observe consumer lag",
                    "./scripts/diagnose.sh consumer-lag",
                    "LAG > 0 visible",
                ),
                (
                    "Scenario B: Start consumer, lag decreases",
                    "Start consumer, check lag again",
                    "LAG decreasing toward 0",
                ),
                (
                    "Scenario C: Schema Registry health",
                    "./scripts/diagnose.sh schema-check",
                    "SR reachable, subjects listed",
                ),
                (
                    "Scenario C: Test incompatible schema",
                    "curl POST with removed field",
                    "HTTP 409 returned (expected)",
                ),
                (
                    "Run workshop checkpoint",
                    "./scripts/workshop-check.sh block6",
                    "All checks PASS, Diamantener Sporn earned",
                ),
                (
                    "Run final checkpoint",
                    "./scripts/workshop-check.sh final",
                    "ALL blocks PASS, Meister-Sporn earned",
                ),
            ],
        ),
        // Level 201
        ChecklistBlock::new(
            Level::L201,
            7,
            "Schmied-Sporn",
            "Make & Act — Build Automation",
            &[
                (
                    "Run make help",
                    "make help",
                    "All targets listed with descriptions",
                ),
                (
                    "Run make build",
                    "make build",
                    "Maven builds successfully via Make",
                ),
                ("Run make test", "make test", "All tests pass via Make"),
                (
                    "Run make local-up",
                    "make local-up",
                    "Broker + SR started via Make",
                ),
                ("Run make topics", "make topics", "Topics created via Make"),
                ("Run make ci", "make ci", "Full CI pipeline passes locally"),
                (
                    "Add custom smoke-test target",
                    "Edit Makefile per lab guide",
                    "make smoke-test runs end-to-end",
                ),
                ("Install act", "act --version", "Act version displayed"),
                (
                    "List CI jobs with act",
                    "act --list --workflows .github/workflows/ci.yaml",
                    "Jobs listed: build, docker, security",
                ),
                (
                    "Run CI locally with act",
                    "act push --workflows .github/workflows/ci.yaml --job build",
                    "Build job passes locally",
                ),
                (
                    "Run act dry-run",
                    "act push --dryrun",
                    "Shows what would execute",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L201,
            8,
            "Ritter-Sporn",
            "kind & Helm — Local Kubernetes",
            &[
                ("Install kind", "kind --version", "kind version displayed"),
                (
                    "Create kind cluster",
                    "kind create cluster --name kafka-workshop --config kind-cluster.yaml",
                    "3-node cluster created",
                ),
                (
                    "Verify cluster",
                    "kubectl get nodes",
                    "3 nodes in Ready state",
                ),
                (
                    "Load Docker images into kind",
                    "kind load docker-image payment-app:workshop --name kafka-workshop",
                    "Images loaded (no registry)",
                ),
                (
                    "Apply dev overlay to kind",
                    "kubectl apply -k k8s/overlays/dev/",
                    "Namespace and deployments created",
                ),
                (
                    "Verify pods",
                    "kubectl get pods -n confluent-apps-dev",
                    "Pods listed (may be in Pending — no actual broker)",
                ),
                ("Install helm", "helm version", "Helm version displayed"),
                (
                    "Template Helm chart (dry-run)",
                    "helm template payment-app ./helm/payment-app --values helm/payment-app/values-dev.yaml",
                    "K8s manifests rendered",
                ),
                (
                    "Install with Helm (dry-run)",
                    "helm install payment-app ./helm/payment-app -n test --dry-run",
                    "Release plan shown",
                ),
                (
                    "Clean up kind cluster",
                    "kind delete cluster --name kafka-workshop",
                    "Cluster destroyed",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L201,
            9,
            "Prüfer-Sporn",
            "k6, ngrok & Shadow Traffic",
            &[
                ("Install k6", "k6 version", "k6 version displayed"),
                (
                    "Review k6 test script",
                    "cat tests/load/payment-producer-test.js",
                    "Test structure understood (stages, thresholds, metrics)",
                ),
                (
                    "Run k6 with low VUs",
                    "k6 run --vus 5 --duration 10s tests/load/payment-producer-test.js",
                    "Test executes (may show connection errors — that's OK without API)",
                ),
                ("Install ngrok", "ngrok version", "ngrok version displayed"),
                (
                    "Expose local port",
                    "ngrok http 8080 (then Ctrl+C)",
                    "Public URL generated, inspect UI at 127.0.0.1:4040",
                ),
                (
                    "Review Shadow Traffic approaches",
                    "Read TOOLS.md Section 5.3",
                    "Understand Cluster Linking, Istio, and app-level mirroring",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L201,
            10,
            "Melder-Sporn",
            "Confluent CLI, Kafka CLI & kcat Mastery",
            &[
                (
                    "Confluent CLI installed",
                    "confluent version",
                    "Version displayed",
                ),
                (
                    "List topics (local or cloud)",
                    "confluent kafka topic list OR kafka-topics --list",
                    "Topics listed",
                ),
                (
                    "kcat JSON output",
                    "kcat -b localhost:9092 -t payments -C -J -o beginning -c 3 | jq .",
                    "JSON output piped through jq",
                ),
                (
                    "kcat message count per partition",
                    "kcat ... -f '%p\\n' | sort | uniq -c",
                    "Message distribution shown",
                ),
                (
                    "kcat batch produce from file",
                    "Create test file, kcat -P -l",
                    "Messages produced from file",
                ),
                (
                    "Kafka perf test (producer)",
                    "kafka-producer-perf-test --topic payments --num-records 1000 ...",
                    "Throughput and latency displayed",
                ),
                (
                    "Kafka perf test (consumer)",
                    "kafka-consumer-perf-test --topic payments --messages 1000",
                    "Consumer throughput displayed",
                ),
            ],
        ),
        // Level 301
        ChecklistBlock::new(
            Level::L301,
            11,
            "Pipeline-Sporn",
            "CI/CD Pipeline Engineering",
            &[
                (
                    "Add ci-lint Make target",
                    "Edit Makefile",
                    "make ci-lint runs spotbugs or equivalent",
                ),
                (
                    "Add ci-k8s-validate Make target",
                    "Edit Makefile",
                    "make ci-k8s-validate renders all 3 overlays",
                ),
                (
                    "Create ci-full.yaml workflow",
                    "Write comprehensive workflow with 4 jobs",
                    "lint → build-and-test → docker-and-scan → k8s-validate",
                ),
                (
                    "Run ci-full with act",
                    "act push --workflows .github/workflows/ci-full.yaml",
                    "All jobs pass locally",
                ),
                (
                    "Create PR quality gate workflow",
                    "Write pr-check.yaml",
                    "Workflow triggers on pull_request events",
                ),
                (
                    "Test PR workflow with act",
                    "act pull_request --workflows .github/workflows/pr-check.yaml",
                    "Quality gate passes",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L301,
            12,
            "Strategen-Sporn",
            "K8s Deployment Strategy",
            &[
                (
                    "Create multi-env kind cluster",
                    "kind create cluster --name multi-env --config kind-cluster.yaml",
                    "Cluster created",
                ),
                (
                    "Deploy all 3 overlays",
                    "kubectl apply -k for dev, qa, prod",
                    "3 namespaces, deployments in each",
                ),
                (
                    "Compare replicas across envs",
                    "kubectl get deploy in each namespace",
                    "DEV=1, QA=2, PROD=4",
                ),
                (
                    "Create Helm chart for payment-app",
                    "Parameterize values per environment",
                    "Chart renders correctly for all envs",
                ),
                (
                    "Test Helm install (dry-run)",
                    "helm install --dry-run",
                    "Release plan matches expectations",
                ),
                (
                    "Test rolling update",
                    "kubectl set image ... then rollout status",
                    "Rolling update completes",
                ),
                (
                    "Test rollback",
                    "kubectl rollout undo / helm rollback",
                    "Previous version restored",
                ),
                ("Clean up", "kind delete cluster", "Cluster destroyed"),
            ],
        ),
        ChecklistBlock::new(
            Level::L301,
            13,
            "Lastprüfer-Sporn",
            "Load Testing & Traffic Management",
            &[
                (
                    "Run k6 normal load scenario",
                    "k6 run tests/load/payment-producer-test.js",
                    "Normal load metrics collected",
                ),
                (
                    "Run k6 spike test",
                    "k6 run with spike configuration",
                    "Spike handled, thresholds evaluated",
                ),
                (
                    "Export k6 results to JSON",
                    "k6 run --out json=results.json ...",
                    "JSON results file created",
                ),
                (
                    "Analyze k6 results",
                    "Review P95, P99, error rate",
                    "Metrics within thresholds",
                ),
                (
                    "Design shadow traffic strategy",
                    "Whiteboard: Cluster Linking vs. Istio vs. app-level",
                    "Strategy documented for team review",
                ),
                (
                    "Integrate k6 into CI",
                    "Add ci-load-test Make target",
                    "make ci-load-test runs successfully",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L301,
            14,
            "Kommandant-Sporn",
            "Confluent Cloud Automation & Ops Runbooks",
            &[
                (
                    "Review ccloud-setup.sh",
                    "cat scripts/ccloud-setup.sh",
                    "Script creates env, cluster, keys, topics",
                ),
                (
                    "Run ccloud-setup (if cloud access)",
                    "./scripts/ccloud-setup.sh dev",
                    "Environment bootstrapped (or dry-run reviewed)",
                ),
                (
                    "Design API key rotation script",
                    "Write key creation + deletion flow",
                    "Script handles create-new, update-secret, delete-old",
                ),
                (
                    "Create ops-runbook.sh",
                    "Write operational procedures script",
                    "check-health, rotate-keys, scale-consumers, reset-offsets",
                ),
                (
                    "Write kcat validation script",
                    "Produce test message, verify in output topic",
                    "End-to-end pipeline validated via script",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L301,
            15,
            "General-Sporn",
            "End-to-End Release Simulation",
            &[
                (
                    "Create feature branch",
                    "git checkout -b feature/new-fraud-rule develop",
                    "Branch created",
                ),
                ("Make code change", "Add new fraud rule", "Code modified"),
                (
                    "Local validation (make ci)",
                    "make build test",
                    "Build and tests pass",
                ),
                (
                    "Run act (CI simulation)",
                    "act push --job build",
                    "CI passes locally",
                ),
                (
                    "Commit and push",
                    "git commit && git push",
                    "Code pushed",
                ),
                (
                    "QA deployment simulation",
                    "make k8s-qa or kubectl apply",
                    "QA overlay applied",
                ),
                (
                    "Load test QA",
                    "k6 run tests/load/...",
                    "Performance acceptable",
                ),
                (
                    "Create release branch",
                    "git checkout -b release/1.1.0",
                    "Release branch created",
                ),
                ("Full CI on release", "make ci", "All checks pass"),
                (
                    "Verify PROD PR template",
                    "Review cd-gitops.yaml PROD promotion logic",
                    "PCI-DSS checklist included in PR template",
                ),
                (
                    "Post-deployment validation",
                    "./scripts/diagnose.sh full",
                    "All health checks pass",
                ),
            ],
        ),
        // Level 401
        ChecklistBlock::new(
            Level::L401,
            16,
            "Tuner-Sporn",
            "Producer & Consumer Tuning",
            &[
                (
                    "Baseline producer perf test",
                    "kafka-producer-perf-test (default settings)",
                    "Records/sec, MB/sec, avg/P99 latency recorded",
                ),
                (
                    "Tuned producer perf test",
                    "batch.size=65536, linger.ms=20, compression.type=lz4",
                    "Improved throughput recorded, compared to baseline",
                ),
                (
                    "Baseline consumer perf test",
                    "kafka-consumer-perf-test (default settings)",
                    "Consumer throughput recorded",
                ),
                (
                    "Tuned consumer perf test",
                    "fetch.min.bytes=1048576",
                    "Improved throughput recorded",
                ),
                (
                    "Document tuning results",
                    "Fill comparison table in checklist",
                    "Before/after metrics documented",
                ),
                (
                    "Review consumer threading strategies",
                    "Thread pool inside consumer pattern",
                    "Understand parallel processing with manual commit",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L401,
            17,
            "Ingenieur-Sporn",
            "Kafka Streams & RocksDB Optimization",
            &[
                (
                    "Review TunedRocksDBConfig.java",
                    "Open in IDE",
                    "Understand block cache, write buffer, compression settings",
                ),
                (
                    "Calculate memory budget",
                    "JVM heap + RocksDB off-heap per store",
                    "Total container memory requirement documented",
                ),
                (
                    "Configure RocksDB setter",
                    "Set rocksdb.config.setter in properties",
                    "TunedRocksDBConfig registered",
                ),
                (
                    "Run KStreams with default RocksDB",
                    "java -jar kstreams-app.jar (default)",
                    "Baseline metrics collected",
                ),
                (
                    "Run KStreams with tuned RocksDB",
                    "java -jar kstreams-app.jar (tuned config)",
                    "Compare block-cache-hit-ratio, process-rate",
                ),
                (
                    "Configure standby replicas",
                    "num.standby.replicas=1",
                    "Understand faster failover benefit",
                ),
                (
                    "Review exactly_once_v2 config",
                    "processing.guarantee=exactly_once_v2",
                    "Understand transaction overhead vs. data integrity",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L401,
            18,
            "Architekt-Sporn",
            "K8s Resource Tuning & JVM Optimization",
            &[
                (
                    "Review JVM flags for KStreams",
                    "G1GC, fixed heap, ExitOnOutOfMemoryError",
                    "Understand each flag's purpose",
                ),
                (
                    "Set K8s requests == limits for memory",
                    "resources.requests.memory == limits.memory",
                    "No memory overcommit for KStreams",
                ),
                (
                    "Configure topology spread",
                    "topologySpreadConstraints in deployment",
                    "Pods spread across K8s nodes",
                ),
                (
                    "Deploy to kind with prod resources",
                    "kubectl apply -k k8s/overlays/prod/",
                    "Pods scheduled with production resource settings",
                ),
                (
                    "Generate load",
                    "k6 run --vus 50 --duration 5m ...",
                    "Sustained load for profiling",
                ),
                (
                    "Monitor resource usage",
                    "kubectl top pods -n confluent-apps-prod",
                    "CPU and memory usage within limits",
                ),
                (
                    "Check for OOMKilled events",
                    "kubectl get events | grep OOM",
                    "No OOM events (or documented if expected)",
                ),
            ],
        ),
        ChecklistBlock::new(
            Level::L401,
            19,
            "Feldherr-Sporn",
            "Production Load Testing & Capacity Planning",
            &[
                (
                    "Capacity planning calculation",
                    "Compute ingress, storage, partitions, instances",
                    "All values documented with formulas",
                ),
                (
                    "Sustained load test (baseline)",
                    "kafka-producer-perf-test 500K records",
                    "Throughput and latency recorded",
                ),
                (
                    "Burst load test (2x peak)",
                    "kafka-producer-perf-test 200K at 2x rate",
                    "System handles burst without errors",
                ),
                (
                    "Consumer throughput test",
                    "kafka-consumer-perf-test 500K messages",
                    "Consumer keeps up with production rate",
                ),
                (
                    "Complete production readiness checklist",
                    "Review all 15 items in LEVEL-401.md",
                    "All items checked and documented",
                ),
                (
                    "Final validation",
                    "./scripts/workshop-check.sh level401",
                    "Grossmeister earned",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_numbers_are_unique_and_contiguous() {
        let checklist = workshop_checklist();
        assert_eq!(checklist.len(), 19);
        for (idx, block) in checklist.iter().enumerate() {
            assert_eq!(block.number, idx as u32 + 1);
        }
    }

    #[test]
    fn blocks_per_level() {
        let checklist = workshop_checklist();
        let count = |level: Level| checklist.iter().filter(|b| b.level == level).count();
        assert_eq!(count(Level::L101), 6);
        assert_eq!(count(Level::L201), 4);
        assert_eq!(count(Level::L301), 5);
        assert_eq!(count(Level::L401), 4);
    }

    #[test]
    fn item_counts_per_level() {
        let checklist = workshop_checklist();
        let items = |level: Level| -> usize {
            checklist
                .iter()
                .filter(|b| b.level == level)
                .map(|b| b.items.len())
                .sum()
        };
        // Level 101 block sizes: 10, 9, 10, 10, 10, 11
        let l101: Vec<usize> = checklist
            .iter()
            .filter(|b| b.level == Level::L101)
            .map(|b| b.items.len())
            .collect();
        assert_eq!(l101, vec![10, 9, 10, 10, 10, 11]);
        assert_eq!(items(Level::L101), 60);
        assert_eq!(items(Level::L201), 34);
        assert_eq!(items(Level::L301), 36);
        assert_eq!(items(Level::L401), 26);
    }

    #[test]
    fn grand_total_item_count() {
        let total: usize = workshop_checklist().iter().map(|b| b.items.len()).sum();
        assert_eq!(total, 156);
    }

    #[test]
    fn display_strings_are_non_empty() {
        for block in workshop_checklist() {
            assert!(!block.badge.is_empty());
            assert!(!block.title.is_empty());
            assert!(!block.items.is_empty());
            for item in &block.items {
                assert!(!item.step.is_empty());
                assert!(!item.action.is_empty());
                assert!(!item.expected.is_empty());
            }
        }
    }
}
