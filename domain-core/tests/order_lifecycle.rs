use anyhow::Result as AnyResult;
use chrono::{DateTime, Utc};
use domain_core::aggregate::{AggregateRoot, DomainEvents};
use domain_core::domain_event::DomainEvent;
use domain_core::entity::{Entity, EntityState};
use domain_core::error::{DomainException, DomainResult, code};
use domain_core::outbox::Outbox;
use domain_core::repository::Repository;
use domain_core::specification::{Specification, predicate};
use domain_core::value_object::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum OrderEvent {
    Placed {
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
        total_cents: i64,
    },
    Paid {
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
    },
    Cancelled {
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
        reason: String,
    },
}

impl DomainEvent for OrderEvent {
    fn event_id(&self) -> Uuid {
        match self {
            OrderEvent::Placed { event_id, .. }
            | OrderEvent::Paid { event_id, .. }
            | OrderEvent::Cancelled { event_id, .. } => *event_id,
        }
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::Placed { occurred_on, .. }
            | OrderEvent::Paid { occurred_on, .. }
            | OrderEvent::Cancelled { occurred_on, .. } => *occurred_on,
        }
    }

    fn event_type(&self) -> &str {
        match self {
            OrderEvent::Placed { .. } => "OrderEvent.Placed",
            OrderEvent::Paid { .. } => "OrderEvent.Paid",
            OrderEvent::Cancelled { .. } => "OrderEvent.Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum OrderStatus {
    Placed,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Order {
    state: EntityState<Uuid>,
    status: OrderStatus,
    total_cents: i64,
    #[serde(skip)]
    events: DomainEvents<OrderEvent>,
}

impl Order {
    fn place(total_cents: i64) -> Self {
        let id = Uuid::new_v4();
        let mut order = Self {
            state: EntityState::with_id(id, Version::new()),
            status: OrderStatus::Placed,
            total_cents,
            events: DomainEvents::new(),
        };
        order.add_domain_event(OrderEvent::Placed {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            total_cents,
        });
        order
    }

    fn pay(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Placed {
            return Err(DomainException::new(42001, "order is not payable"));
        }
        self.status = OrderStatus::Paid;
        self.add_domain_event(OrderEvent::Paid {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
        });
        Ok(())
    }

    fn cancel(&mut self, reason: &str) -> DomainResult<()> {
        if self.status == OrderStatus::Cancelled {
            return Err(DomainException::new(42002, "order already cancelled"));
        }
        self.status = OrderStatus::Cancelled;
        self.add_domain_event(OrderEvent::Cancelled {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            reason: reason.to_string(),
        });
        Ok(())
    }
}

impl Entity for Order {
    type Id = Uuid;

    fn state(&self) -> &EntityState<Self::Id> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState<Self::Id> {
        &mut self.state
    }
}

impl AggregateRoot for Order {
    const TYPE: &'static str = "order";
    type Event = OrderEvent;

    fn events(&self) -> &DomainEvents<Self::Event> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut DomainEvents<Self::Event> {
        &mut self.events
    }
}

#[derive(Default)]
struct InMemoryOrderRepo {
    rows: Mutex<HashMap<Uuid, Order>>,
}

#[async_trait::async_trait]
impl Repository<Order> for InMemoryOrderRepo {
    async fn save(&self, aggregate: &mut Order) -> DomainResult<()> {
        let id = *aggregate
            .id()
            .ok_or_else(|| DomainException::new(42000, "order has no id"))?;

        // 持久化层职责：递增版本并回填审计信息
        aggregate.set_version(aggregate.version().next());
        aggregate.state_mut().audit_mut().touch("test-runner");

        // 行快照不含未提交事件
        let mut row = aggregate.clone();
        row.clear_domain_events();
        self.rows.lock().unwrap().insert(id, row);
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> DomainResult<Option<Order>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn find_all(
        &self,
        spec: &(dyn Specification<Order> + Send + Sync),
    ) -> DomainResult<Vec<Order>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|order| spec.is_satisfied_by(order))
            .cloned()
            .collect())
    }

    async fn delete(&self, aggregate: &Order) -> DomainResult<()> {
        if let Some(id) = aggregate.id() {
            self.rows.lock().unwrap().remove(id);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &Uuid) -> DomainResult<()> {
        self.rows.lock().unwrap().remove(id);
        Ok(())
    }
}

#[test]
fn buffer_then_drain_into_outbox_records() -> AnyResult<()> {
    let mut order = Order::place(2500);

    let pending = order.domain_events();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].event_type(), "OrderEvent.Placed");

    order.clear_domain_events();
    assert!(order.domain_events().is_empty());

    order.pay()?;
    order.cancel("customer request")?;
    let pending = order.domain_events();
    let types: Vec<&str> = pending.iter().map(|e| e.event_type()).collect();
    assert_eq!(types, vec!["OrderEvent.Paid", "OrderEvent.Cancelled"]);

    // 持久化成功后：取走事件，逐个包成 Outbox 行
    let aggregate_id = *order.id().unwrap();
    let records: Vec<Outbox<OrderEvent>> = order
        .take_domain_events()
        .into_iter()
        .map(|event| Outbox::for_event(Order::TYPE, aggregate_id, event))
        .collect();

    assert!(order.domain_events().is_empty());
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.aggregate_type(), "order");
        assert_eq!(record.aggregate_id(), aggregate_id);
        assert_eq!(record.event_type(), record.payload().event_type());
        assert!(!record.id().is_nil());
    }
    assert_ne!(records[0].id(), records[1].id());
    Ok(())
}

#[test]
fn behavior_methods_enforce_domain_rules() {
    let mut order = Order::place(100);
    order.cancel("out of stock").unwrap();

    let err = order.pay().unwrap_err();
    assert_eq!(err.code(), 42001);

    let err = order.cancel("again").unwrap_err();
    assert_eq!(err.code(), 42002);
}

#[tokio::test]
async fn repository_round_trip_with_specifications() -> AnyResult<()> {
    let repo = Arc::new(InMemoryOrderRepo::default());

    let mut small = Order::place(500);
    let mut big = Order::place(9000);
    big.pay()?;

    repo.save(&mut small).await?;
    repo.save(&mut big).await?;

    // 版本由仓储递增，审计由仓储回填
    assert_eq!(small.version().value(), 1);
    assert_eq!(small.last_modified_by(), Some("test-runner"));

    let small_id = *small.id().unwrap();
    let big_id = *big.id().unwrap();

    let loaded = repo.get_by_id(&small_id).await?;
    assert_eq!(loaded.total_cents, 500);
    assert!(loaded.domain_events().is_empty());
    assert!(repo.exists_by_id(&big_id).await?);

    let paid = predicate(|o: &Order| o.status == OrderStatus::Paid);
    let expensive = predicate(|o: &Order| o.total_cents >= 1000);
    let paid_and_expensive = paid.and(expensive);

    let matched = repo.find_all(&paid_and_expensive).await?;
    assert_eq!(matched.len(), 1);
    assert_eq!(*matched[0].id().unwrap(), big_id);
    assert!(repo.exists(&paid_and_expensive).await?);

    repo.delete_by_id(&big_id).await?;
    assert!(!repo.exists(&paid_and_expensive).await?);

    Ok(())
}

#[tokio::test]
async fn get_by_id_signals_not_found() {
    let repo = InMemoryOrderRepo::default();

    let missing = Uuid::new_v4();
    let err = repo.get_by_id(&missing).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), code::NOT_FOUND);
    assert!(err.message().contains("order"));

    assert!(!repo.exists_by_id(&missing).await.unwrap());
}
